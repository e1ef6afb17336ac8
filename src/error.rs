//! Centralized error types for headerblock.

use thiserror::Error;

/// All errors produced by the headerblock library.
///
/// The engine is deliberately permissive: parsing, queries, and mutations
/// never fail on malformed input. The only fallible surface is converting
/// built bytes to text.
#[derive(Error, Debug)]
pub enum HeaderError {
    /// The built header block is not valid UTF-8.
    #[error("header block is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

/// Convenience alias for `Result<T, HeaderError>`.
pub type Result<T> = std::result::Result<T, HeaderError>;
