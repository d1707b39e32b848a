//! Problem collection: merging and JSON persistence.

use crate::error::Result;
use crate::model::ProblemRecord;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// An ordered collection of problem records, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemCollection {
    records: Vec<ProblemRecord>,
}

impl ProblemCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing record list.
    pub fn from_records(records: Vec<ProblemRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records in order.
    pub fn records(&self) -> &[ProblemRecord] {
        &self.records
    }

    /// Consume the collection and return the records.
    pub fn into_records(self) -> Vec<ProblemRecord> {
        self.records
    }

    /// Load a previously written collection.
    ///
    /// A missing path, unreadable file, or malformed JSON all degrade to an
    /// empty collection with a warning; merge errors are never escalated.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Self {
        let Some(path) = path else {
            return Self::new();
        };
        let path = path.as_ref();

        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("could not read existing file {}: {}", path.display(), e);
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<ProblemRecord>>(&data) {
            Ok(records) => {
                info!("loaded {} existing problems from {}", records.len(), path.display());
                Self::from_records(records)
            }
            Err(e) => {
                warn!("ignoring malformed existing file {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// Merge new records into the collection and re-sort ascending by id.
    ///
    /// The sort is stable and duplicate ids are retained, so the merged length
    /// is always `prior + new` exactly.
    pub fn merge(mut self, new: Vec<ProblemRecord>) -> Self {
        self.records.extend(new);
        self.records.sort_by_key(|r| r.id);
        self
    }

    /// Write the collection as a JSON array with 2-space indentation.
    ///
    /// Non-ASCII characters are preserved literally and the key order is
    /// `{id, category, difficulty, problem}`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write the first `n` records to a sibling file derived from `path` by
    /// inserting `_sample` before the extension. Returns the derived path.
    pub fn save_sample<P: AsRef<Path>>(&self, path: P, n: usize) -> Result<PathBuf> {
        let sample_path = Self::sample_path(path.as_ref());
        let count = n.min(self.records.len());
        let json = serde_json::to_string_pretty(&self.records[..count])?;
        fs::write(&sample_path, json)?;
        Ok(sample_path)
    }

    /// Derive the sample path: `problems.json` becomes `problems_sample.json`.
    pub fn sample_path(path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        match path.extension() {
            Some(ext) => path.with_file_name(format!("{}_sample.{}", stem, ext.to_string_lossy())),
            None => path.with_file_name(format!("{}_sample", stem)),
        }
    }
}
