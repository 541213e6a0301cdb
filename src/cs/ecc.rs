//! Error correction code implementations.
//!
//! Currently implemented:
//! - Hamming(21,16) encoding
//!
//! # Error Correction Algorithms
//!
//! Error correction codes add redundant bits to data so that a receiver can detect and correct
//! transmission errors. Only the encoding side lives here.
//!
//! # Examples
//!
//! ```rust
//! use hamming21::cs::ecc::{encode, PackOrder, encode_with_order};
//!
//! assert_eq!(encode(0x1234), 0x054441);
//! assert_eq!(encode_with_order(0x1234, PackOrder::MsbFirst), 0x104454);
//! ```

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Hamming(21,16) encoding
pub mod hamming;
pub use hamming::{
    codebook, encode, encode_with_order, encode_word, is_consistent, PackOrder, CODEWORD_BITS,
    DATA_BITS, PARITY_BITS,
};

/// Encodes all 65 536 data words and checks every resulting codeword.
///
/// Returns the number of codewords checked, or the first inconsistent one.
pub fn verify_codebook(order: PackOrder) -> Result<usize> {
    let book = codebook(order);
    for (data, &codeword) in book.iter().enumerate() {
        let data = data as u16;
        if !is_consistent(data, codeword, order) {
            return Err(Error::SelfCheck { data, codeword });
        }
    }
    log::debug!("verified {} codewords ({:?})", book.len(), order);
    Ok(book.len())
}
