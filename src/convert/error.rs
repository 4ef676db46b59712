//! Conversion error types

use thiserror::Error;

/// Error types for conversion calls
///
/// Every failure is a rejected single call; nothing is recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Unknown category '{name}' (expected temperature, length, time, or volume)")]
    InvalidCategory { name: String },

    #[error("Unit '{unit}' is not a {category} unit")]
    InvalidUnit { unit: String, category: String },

    #[error("Invalid numeric value '{input}'")]
    InvalidValue { input: String },
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
