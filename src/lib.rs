//! # mathpdf
//!
//! Extracts mathematical word-problems from PDF documents and converts them
//! to structured JSON with repaired LaTeX notation.
//!
//! PDF text extraction is lossy: glyphs arrive misencoded, internal `cid:`
//! codes leak into the text, and spacing around math falls apart. This crate
//! segments the extracted text into numbered problems, separates each stem
//! from its multiple-choice options, repairs the notation with an ordered
//! sequence of heuristic passes, and classifies every problem by subject and
//! difficulty.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mathpdf::{extract_file, ProblemCollection};
//!
//! fn main() -> mathpdf::Result<()> {
//!     let problems = extract_file("problems.pdf")?;
//!     ProblemCollection::from_records(problems).save("problems.json")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! raw text → segmentation → choice separation → notation repair →
//! classification → validation → JSON records
//!
//! The repair passes are best-effort: heavily corrupted input may still come
//! out imperfect, and validation only warns, never drops a problem.

pub mod classify;
pub mod error;
pub mod model;
pub mod parse;
pub mod pdf;
pub mod pipeline;
pub mod repair;
pub mod symbols;
pub mod validate;

pub use error::{Error, Result};
pub use model::{Difficulty, ProblemCollection, ProblemRecord};
pub use pipeline::{ExtractOptions, ProblemExtractor};
pub use repair::RepairPipeline;
pub use symbols::SymbolTable;
pub use validate::{validate, ValidationRules, Violation};

use std::path::Path;

/// Extract problems from a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// let problems = mathpdf::extract_file("problems.pdf").unwrap();
/// println!("extracted {} problems", problems.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Vec<ProblemRecord>> {
    ProblemExtractor::new(ExtractOptions::default()).extract_file(path)
}

/// Extract problems from a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use mathpdf::{extract_file_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new().with_start_problem(18);
/// let problems = extract_file_with_options("problems.pdf", options).unwrap();
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<Vec<ProblemRecord>> {
    ProblemExtractor::new(options).extract_file(path)
}

/// Extract problems from already-extracted text.
///
/// Useful when the text blob comes from somewhere other than the bundled PDF
/// extractor.
pub fn extract_from_text(text: &str, options: ExtractOptions) -> Result<Vec<ProblemRecord>> {
    ProblemExtractor::new(options).extract_from_text(text)
}
