//! Error types for the mathpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for mathpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting problems.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// Error extracting text content from the PDF.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// The extracted text contained no numbered problems at or above the
    /// start threshold.
    #[error("No problems found in extracted text")]
    NoProblems,

    /// Error serializing or deserializing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}
