//! Error types for the deckgen library.

use std::io;
use thiserror::Error;

/// Result type alias for deckgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or saving a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing the ZIP package.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error producing XML content.
    #[error("XML write error: {0}")]
    XmlWrite(String),

    /// The presentation has no slides.
    #[error("Presentation is empty")]
    EmptyPresentation,
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlWrite(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyPresentation;
        assert_eq!(err.to_string(), "Presentation is empty");

        let err = Error::XmlWrite("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "XML write error: unexpected end of input");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
