//! # Mesh Errors
//!
//! Error types for mesh loading operations.

use thiserror::Error;

/// Errors that can occur while loading an uploaded mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// File extension not recognized by any parser
    #[error("Unsupported file format: {extension:?}")]
    UnsupportedFormat { extension: String },

    /// Bytes do not conform to the expected layout for the detected format
    #[error("STL parse failure: {message}")]
    ParseFailure { message: String },
}

impl MeshError {
    /// Creates an unsupported format error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Creates a parse failure error.
    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::ParseFailure {
            message: message.into(),
        }
    }
}
