//! Advisory structural checks on assembled records.
//!
//! Validation never blocks output: violations are reported to the caller
//! (and logged by the pipeline) while the record is emitted unchanged.

use crate::model::ProblemRecord;
use std::fmt;

/// Length bounds for a problem body, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Minimum characters in a problem body
    pub min_problem_length: usize,

    /// Maximum characters in a problem body
    pub max_problem_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_problem_length: 10,
            max_problem_length: 5000,
        }
    }
}

/// A single advisory violation found on a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Problem id is not a positive integer
    NonPositiveId,

    /// Category tag is empty
    EmptyCategory,

    /// Problem body is shorter than the minimum
    TooShort(usize),

    /// Problem body is longer than the maximum
    TooLong(usize),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NonPositiveId => write!(f, "id must be a positive integer"),
            Violation::EmptyCategory => write!(f, "category is empty"),
            Violation::TooShort(len) => write!(f, "problem too short: {} chars", len),
            Violation::TooLong(len) => write!(f, "problem too long: {} chars", len),
        }
    }
}

/// Check a record against the rules.
///
/// Difficulty membership in {Easy, Medium, Hard} is enforced by the
/// [`crate::model::Difficulty`] type itself, so only the observable checks
/// remain here.
pub fn validate(record: &ProblemRecord, rules: &ValidationRules) -> Vec<Violation> {
    let mut violations = Vec::new();

    if record.id == 0 {
        violations.push(Violation::NonPositiveId);
    }
    if record.category.is_empty() {
        violations.push(Violation::EmptyCategory);
    }

    let length = record.problem.chars().count();
    if length < rules.min_problem_length {
        violations.push(Violation::TooShort(length));
    } else if length > rules.max_problem_length {
        violations.push(Violation::TooLong(length));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn record(problem: &str) -> ProblemRecord {
        ProblemRecord {
            id: 1,
            category: "Mathematics".to_string(),
            difficulty: Difficulty::Easy,
            problem: problem.to_string(),
        }
    }

    #[test]
    fn test_valid_record_has_no_violations() {
        let violations = validate(&record("What is 2+2?"), &ValidationRules::default());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_exactly_min_length_passes() {
        // 10 characters, right at the bound.
        let violations = validate(&record("0123456789"), &ValidationRules::default());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_one_under_min_length_flagged() {
        let violations = validate(&record("012345678"), &ValidationRules::default());
        assert_eq!(violations, vec![Violation::TooShort(9)]);
    }

    #[test]
    fn test_over_max_length_flagged() {
        let rules = ValidationRules { min_problem_length: 1, max_problem_length: 20 };
        let violations = validate(&record(&"x".repeat(21)), &rules);
        assert_eq!(violations, vec![Violation::TooLong(21)]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 10 characters, more than 10 bytes.
        let violations = validate(&record("αααααααααα"), &ValidationRules::default());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_zero_id_flagged() {
        let mut r = record("A long enough problem body.");
        r.id = 0;
        let violations = validate(&r, &ValidationRules::default());
        assert_eq!(violations, vec![Violation::NonPositiveId]);
    }

    #[test]
    fn test_empty_category_flagged() {
        let mut r = record("A long enough problem body.");
        r.category.clear();
        let violations = validate(&r, &ValidationRules::default());
        assert_eq!(violations, vec![Violation::EmptyCategory]);
    }

    #[test]
    fn test_violation_display() {
        assert_eq!(Violation::TooShort(9).to_string(), "problem too short: 9 chars");
        assert_eq!(Violation::TooLong(6000).to_string(), "problem too long: 6000 chars");
    }
}
