//! Byte Parser Error Types
//!
//! Every failure is a caller-input problem; nothing here is recovered locally.

use thiserror::Error;

/// Result type for byte-parser operations
pub type Result<T> = std::result::Result<T, ParserError>;

/// Decoding errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// Array input is not a whole number of element units
    #[error("Size mismatch: {len} bytes is not a whole number of {unit}")]
    SizeMismatch { unit: &'static str, len: usize },

    /// Scalar input is not exactly one unit wide
    #[error("Width mismatch: expected {expected} bytes, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    /// Dynamic dispatch received a tag outside the closed set
    #[error("Not supported data type: {0}")]
    UnsupportedType(u8),

    /// Unrecognized byte order name
    #[error("Invalid byte order: {0:?} (expected \"big\" or \"little\")")]
    InvalidByteOrder(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for ParserError {
    fn from(err: figment::Error) -> Self {
        ParserError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl ParserError {
    pub fn size_mismatch(unit: &'static str, len: usize) -> Self {
        ParserError::SizeMismatch { unit, len }
    }

    pub fn width_mismatch(expected: usize, actual: usize) -> Self {
        ParserError::WidthMismatch { expected, actual }
    }

    pub fn invalid_byte_order(value: impl Into<String>) -> Self {
        ParserError::InvalidByteOrder(value.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ParserError::Config(msg.into())
    }

    /// Check if this error was caused by the length of the input buffer
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            ParserError::SizeMismatch { .. } | ParserError::WidthMismatch { .. }
        )
    }
}
