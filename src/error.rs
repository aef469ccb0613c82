//! Error types for locomath text parsing.
//!
//! Numerical kernels never fail: degenerate input (zero vector, singular matrix)
//! produces NaN/Inf instead. Reading a vector or matrix from text is the only
//! operation that reports a recoverable error.

use thiserror::Error;

/// Errors produced when reading a vector or matrix from whitespace-separated text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input ran out of tokens.
    #[error("expected {expected} numeric tokens, found {found}")]
    MissingToken {
        /// Number of tokens the target type needs.
        expected: usize,
        /// Number of tokens present in the input.
        found: usize,
    },
    /// A token is not a valid floating-point number.
    #[error("token {index} ({token:?}) is not a valid number")]
    InvalidToken {
        /// Zero-based position of the token.
        index: usize,
        /// The offending token.
        token: String,
    },
}

/// Result type alias for locomath parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Creates a missing-token error.
pub fn missing_token(expected: usize, found: usize) -> ParseError {
    ParseError::MissingToken { expected, found }
}

/// Creates an invalid-token error.
pub fn invalid_token(index: usize, token: impl Into<String>) -> ParseError {
    ParseError::InvalidToken {
        index,
        token: token.into(),
    }
}
