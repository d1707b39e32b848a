//! PDF format detection and whole-document text extraction.
//!
//! The actual PDF parsing is delegated to the `pdf-extract` crate; this module
//! only validates the header and produces the single text blob the rest of the
//! pipeline works on.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Check if a file is a valid PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    read_header(path.as_ref()).map(|h| is_pdf_bytes(&h)).unwrap_or(false)
}

fn read_header(path: &Path) -> Result<[u8; 5]> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut header = [0u8; 5];
    reader.read_exact(&mut header)?;
    Ok(header)
}

/// Extract the full text content of a PDF document.
///
/// Returns the concatenated text of all pages as a single blob. The file must
/// start with the PDF magic bytes; anything else fails with
/// [`Error::UnknownFormat`] before extraction is attempted.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    let mut reader = BufReader::new(File::open(path)?);
    let mut header = [0u8; 5];
    if reader.read_exact(&mut header).is_err() || !is_pdf_bytes(&header) {
        return Err(Error::UnknownFormat);
    }

    let text = pdf_extract::extract_text(path)?;
    Ok(text)
}
