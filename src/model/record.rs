//! Problem record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Introductory computation or lookup
    Easy,
    /// Requires a standard technique
    Medium,
    /// Requires proof-level or abstract reasoning
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A single extracted math problem.
///
/// Field order is the JSON key order: `{id, category, difficulty, problem}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// Problem number from the source document
    pub id: u32,

    /// Subject category tag, `"Mathematics"` when no keyword matched
    pub category: String,

    /// Difficulty level
    pub difficulty: Difficulty,

    /// Normalized problem text, possibly containing an embedded `Choices:`
    /// block followed by newline-separated choice lines
    pub problem: String,
}

impl ProblemRecord {
    /// Whether the problem text carries a multiple-choice block.
    pub fn has_choices(&self) -> bool {
        self.problem.contains("Choices:")
    }
}
