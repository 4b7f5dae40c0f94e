//! Error types for the cvforge export engine.

use std::io;
use thiserror::Error;

/// Result type alias for cvforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while exporting a CV.
///
/// Malformed CV content never produces an error; only backend stages
/// (font loading, PDF serialization, archive writing, JSON encoding) fail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The embedded font payload could not be parsed.
    #[error("Font loading error: {0}")]
    FontLoad(String),

    /// Serializing the PDF object graph failed.
    #[error("PDF output error: {0}")]
    PdfOutput(String),

    /// Writing a part of the DOCX archive failed.
    #[error("Archive error while writing {part}: {message}")]
    Archive {
        /// Archive part (or stage) that was being written
        part: String,
        /// Backend error message
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No exporter is registered for the requested format.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The byte sequence is not a recognised export artifact.
    #[error("Unknown file format")]
    UnknownFormat,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap an archive backend error with the part being written.
    pub(crate) fn archive(part: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Error::Archive {
            part: part.into(),
            message: err.to_string(),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfOutput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("odt".to_string());
        assert_eq!(err.to_string(), "Unsupported export format: odt");

        let err = Error::archive("word/document.xml", "disk full");
        assert_eq!(
            err.to_string(),
            "Archive error while writing word/document.xml: disk full"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_lopdf_io_error_conversion() {
        let err: Error = lopdf::Error::IO(io::Error::new(io::ErrorKind::Other, "boom")).into();
        assert!(matches!(err, Error::Io(_)));

        let err: Error = lopdf::Error::ObjectNotFound.into();
        assert!(matches!(err, Error::PdfOutput(_)));
    }
}
