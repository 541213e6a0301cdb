//! Hamming(21,16) encoder.
//!
//! Hamming codes place parity bits at the positions whose 1-based index is a power of two and
//! the data bits everywhere else. A parity bit `j` checks every position whose 1-based index has
//! bit `j` set. With 16 data bits that takes 5 parity bits, giving a 21 bit codeword.
//!
//! Encoding runs in three stages over a 21 bit vector:
//! - [`place_data_bits`] scatters the data bits into their positions
//! - [`compute_parity_bits`] fills in the five parity slots
//! - [`pack`] folds the vector into an integer
//!
//! # Examples
//!
//! ```
//! use hamming21::cs::ecc::hamming::{encode, DATA_BIT_POSITIONS};
//!
//! let codeword = encode(0x0001);
//! assert_eq!(codeword, 0x108009);
//!
//! // The least significant data bit lands at the last data position.
//! assert_eq!((codeword >> DATA_BIT_POSITIONS[15]) & 1, 1);
//! ```

use bitvec::prelude::*;
use log::trace;
use num_traits::PrimInt;

/// Number of data bits carried by a codeword.
pub const DATA_BITS: usize = 16;

/// Number of parity bits in a codeword.
pub const PARITY_BITS: usize = 5;

/// Total codeword width.
pub const CODEWORD_BITS: usize = DATA_BITS + PARITY_BITS;

/// Positions holding the data bits, most significant input bit first.
pub const DATA_BIT_POSITIONS: [usize; DATA_BITS] =
    [2, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14, 16, 17, 18, 19, 20];

/// Positions holding the parity bits, lowest order check first.
pub const PARITY_BIT_POSITIONS: [usize; PARITY_BITS] = [0, 1, 3, 7, 15];

/// Largest possible codeword plus one.
pub const CODEWORD_LIMIT: u32 = 1 << CODEWORD_BITS;

/// Bit vector used while building a codeword. Index 0 is the least significant bit.
pub type CodewordBits = BitArr!(for CODEWORD_BITS, in u32, Lsb0);

const _: () = assert!(tables_partition_codeword());

/// Returns true when the data and parity tables cover every codeword position exactly once.
pub const fn tables_partition_codeword() -> bool {
    let mut seen = [0u8; CODEWORD_BITS];
    let mut i = 0;
    while i < DATA_BITS {
        let position = DATA_BIT_POSITIONS[i];
        if position >= CODEWORD_BITS {
            return false;
        }
        seen[position] += 1;
        i += 1;
    }
    let mut j = 0;
    while j < PARITY_BITS {
        let position = PARITY_BIT_POSITIONS[j];
        if position >= CODEWORD_BITS {
            return false;
        }
        seen[position] += 1;
        j += 1;
    }
    let mut k = 0;
    while k < CODEWORD_BITS {
        if seen[k] != 1 {
            return false;
        }
        k += 1;
    }
    true
}

/// Order in which the bit vector is folded into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackOrder {
    /// Vector index `i` becomes bit `i` of the codeword.
    #[default]
    LsbFirst,
    /// Vector index `i` becomes bit `20 - i`, the layout the classic `hamming` tool prints.
    MsbFirst,
}

/// Raises `base` to `exponent` by repeated multiplication.
///
/// `power(b, 0)` is one for every `b`.
pub fn power<T: PrimInt>(base: T, exponent: u32) -> T {
    let mut result = T::one();
    for _ in 0..exponent {
        result = result * base;
    }
    result
}

/// Scatters the low 16 bits of `data` into a fresh codeword vector.
///
/// Bit `15 - i` of `data` goes to `DATA_BIT_POSITIONS[i]`. Parity slots are left clear and any
/// bits above bit 15 are ignored.
pub fn place_data_bits(data: u32) -> CodewordBits {
    let mut bits = CodewordBits::ZERO;
    for (i, &position) in DATA_BIT_POSITIONS.iter().enumerate() {
        let bit = (data >> (DATA_BITS - (i + 1))) & 1;
        bits.set(position, bit == 1);
    }
    bits
}

/// Computes parity check `parity_index` over the current contents of `bits`.
///
/// Counts the set bits at every 1-based position whose index has bit `parity_index` set,
/// including the parity slot itself.
pub fn check_parity(bits: &BitSlice<u32, Lsb0>, parity_index: usize) -> bool {
    let count = (1..=CODEWORD_BITS)
        .filter(|&position| (position >> parity_index) & 1 == 1 && bits[position - 1])
        .count();
    count % 2 == 1
}

/// Fills the parity slots of `bits`, lowest order check first.
///
/// A check never covers a higher order parity slot, so each one only reads values that are
/// already final.
pub fn compute_parity_bits(bits: &mut CodewordBits) {
    for (parity_index, &position) in PARITY_BIT_POSITIONS.iter().enumerate() {
        let parity = check_parity(&bits[..CODEWORD_BITS], parity_index);
        bits.set(position, parity);
    }
}

/// Folds the vector into an integer, vector index `i` at bit `i`.
pub fn pack(bits: &CodewordBits) -> u32 {
    pack_with_order(bits, PackOrder::LsbFirst)
}

/// Folds the vector into an integer in the given order.
pub fn pack_with_order(bits: &CodewordBits, order: PackOrder) -> u32 {
    bits[..CODEWORD_BITS]
        .iter()
        .by_vals()
        .enumerate()
        .fold(0u32, |word, (index, bit)| {
            let shift = match order {
                PackOrder::LsbFirst => index,
                PackOrder::MsbFirst => CODEWORD_BITS - (index + 1),
            };
            word | (u32::from(bit) << shift)
        })
}

/// Spreads a packed codeword back out into a bit vector.
pub fn unpack(codeword: u32, order: PackOrder) -> CodewordBits {
    let mut bits = CodewordBits::ZERO;
    for index in 0..CODEWORD_BITS {
        let shift = match order {
            PackOrder::LsbFirst => index,
            PackOrder::MsbFirst => CODEWORD_BITS - (index + 1),
        };
        bits.set(index, (codeword >> shift) & 1 == 1);
    }
    bits
}

/// Encodes a 16 bit value into its 21 bit Hamming codeword.
pub fn encode(data: u16) -> u32 {
    encode_with_order(u32::from(data), PackOrder::LsbFirst)
}

/// Encodes the low 16 bits of `data`, ignoring anything above them.
pub fn encode_word(data: u32) -> u32 {
    encode_with_order(data, PackOrder::LsbFirst)
}

/// Encodes the low 16 bits of `data` and packs the result in `order`.
pub fn encode_with_order(data: u32, order: PackOrder) -> u32 {
    let mut bits = place_data_bits(data);
    trace!("placed data {:#06x}: {:b}", data & 0xffff, bits[..CODEWORD_BITS].load_le::<u32>());
    compute_parity_bits(&mut bits);
    let codeword = pack_with_order(&bits, order);
    trace!("codeword for {:#06x} ({:?}) is {:#08x}", data & 0xffff, order, codeword);
    codeword
}

/// Checks a codeword against the data it was built from.
///
/// The data bits must match `data` and every parity slot must agree with its check recomputed
/// over the finished vector with that slot cleared.
pub fn is_consistent(data: u16, codeword: u32, order: PackOrder) -> bool {
    if codeword >= CODEWORD_LIMIT {
        return false;
    }
    let bits = unpack(codeword, order);
    let data_matches = DATA_BIT_POSITIONS
        .iter()
        .enumerate()
        .all(|(i, &position)| bits[position] == ((data >> (DATA_BITS - (i + 1))) & 1 == 1));
    if !data_matches {
        return false;
    }
    PARITY_BIT_POSITIONS
        .iter()
        .enumerate()
        .all(|(parity_index, &position)| {
            let mut cleared = bits;
            cleared.set(position, false);
            check_parity(&cleared[..CODEWORD_BITS], parity_index) == bits[position]
        })
}

/// Encodes every 16 bit value. The codeword for `d` is at index `d`.
#[cfg(feature = "parallel")]
pub fn codebook(order: PackOrder) -> Vec<u32> {
    use rayon::prelude::*;

    (0..=u16::MAX as u32)
        .into_par_iter()
        .map(|data| encode_with_order(data, order))
        .collect()
}

/// Encodes every 16 bit value. The codeword for `d` is at index `d`.
#[cfg(not(feature = "parallel"))]
pub fn codebook(order: PackOrder) -> Vec<u32> {
    (0..=u16::MAX as u32)
        .map(|data| encode_with_order(data, order))
        .collect()
}
