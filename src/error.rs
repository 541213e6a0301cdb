//! Error types for the hamming21 crate.
//!
//! Encoding itself cannot fail. These errors come from reading and parsing input and from the
//! exhaustive self-check.

use std::num::ParseIntError;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No hexadecimal digits were supplied
    #[error("no hexadecimal value was entered")]
    EmptyInput,

    /// The text could not be read as a hexadecimal integer
    #[error("'{input}' is not a hexadecimal value: {source}")]
    InvalidHex {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// A codeword failed the consistency check
    #[error("codeword {codeword:#08x} for data {data:#06x} is inconsistent")]
    SelfCheck { data: u16, codeword: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
