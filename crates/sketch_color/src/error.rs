//! Color error types

use thiserror::Error;

/// Color parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not a 6-digit hex color code
    #[error("Invalid color format: {0:?} (expected 6 hex digits, optionally prefixed with '#')")]
    InvalidColorFormat(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
