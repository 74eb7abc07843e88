//! Paint error types

use sketch_color::ColorError;
use thiserror::Error;

/// Drawing and shape errors
#[derive(Error, Debug)]
pub enum PaintError {
    /// `pop` called without a matching `push`
    #[error("No style frame to pop")]
    EmptyStack,

    /// Parameter outside the range an operation accepts
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Descriptor tag that no drawing routine handles
    #[error("Unsupported shape type: {0:?}")]
    UnsupportedShapeType(String),

    /// Polygon without any vertices
    #[error("Cannot draw a polygon with no vertices")]
    EmptyPolygon,

    /// Color value could not be parsed
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Malformed shape descriptor
    #[error("Invalid shape descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// Failed to read a config file
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse canvas configuration
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// Failed to serialize canvas configuration
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
