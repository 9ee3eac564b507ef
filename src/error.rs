//! Error types for qmc-rs.
//!
//! Only recoverable conditions live here: malformed input and I/O failures.
//! Mixing terms of different lengths in [`Term::distance`][crate::term::Term::distance]
//! is a programming error and panics instead.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading input or writing the table dump
#[derive(Error, Debug)]
pub enum Error {
    /// Truth table length is not a power of two
    #[error("Invalid truth table length {len}: expected a power of two")]
    InvalidLength { len: usize },

    /// Truth table value other than 0 or 1
    #[error("Non-binary value {value:?} at index {index}")]
    NonBinaryValue { index: usize, value: String },

    /// Character that is not a valid term digit
    #[error("Invalid term digit {ch:?} at position {index}")]
    InvalidDigit { index: usize, ch: char },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
