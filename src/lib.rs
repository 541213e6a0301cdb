pub mod cs;
pub mod error;
pub mod session;

pub use cs::ecc::{self, hamming};
pub use error::{Error, Result};
