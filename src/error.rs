//! Error types for the docforge library.

use std::io;
use thiserror::Error;

/// Result type alias for docforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document assembly and rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading inputs or writing the artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content specification is not valid JSON.
    #[error("Invalid content specification: {0}")]
    Spec(#[from] serde_json::Error),

    /// An image supplied as a cover logo could not be decoded.
    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    /// Error packaging the DOCX artifact.
    #[error("DOCX packaging error: {0}")]
    Docx(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidImage("not a PNG".to_string());
        assert_eq!(err.to_string(), "Invalid image data: not a PNG");

        let err = Error::Docx("zip failure".to_string());
        assert_eq!(err.to_string(), "DOCX packaging error: zip failure");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Spec(_)));
    }
}
