//! End-to-end extraction pipeline.
//!
//! Control flow: raw text → segmentation → per-problem spans → choice
//! separation → notation repair → classification → validation → records.
//! Processing is strictly sequential; each problem is handled independently,
//! which also keeps log ordering deterministic.

use crate::classify::Classifier;
use crate::error::{Error, Result};
use crate::model::ProblemRecord;
use crate::parse::{ChoiceSplitter, ProblemSpan, Segmenter};
use crate::pdf;
use crate::repair::RepairPipeline;
use crate::symbols::SymbolTable;
use crate::validate::{validate, ValidationRules};
use log::{info, warn};
use regex::Regex;
use std::path::Path;

/// Options for the extraction pipeline.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Lowest problem number to retain
    pub start_problem: u32,

    /// Advisory validation bounds
    pub rules: ValidationRules,

    /// Substitution and classification tables
    pub table: SymbolTable,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lowest problem number to retain.
    pub fn with_start_problem(mut self, start_problem: u32) -> Self {
        self.start_problem = start_problem;
        self
    }

    /// Set the validation bounds.
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the substitution and classification tables.
    pub fn with_table(mut self, table: SymbolTable) -> Self {
        self.table = table;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            start_problem: 1,
            rules: ValidationRules::default(),
            table: SymbolTable::default(),
        }
    }
}

/// Extracts problem records from PDF documents or raw text.
pub struct ProblemExtractor {
    options: ExtractOptions,
    segmenter: Segmenter,
    splitter: ChoiceSplitter,
    repairer: RepairPipeline,
    classifier: Classifier,
    whitespace: Regex,
    number_prefix: Regex,
}

impl ProblemExtractor {
    /// Create an extractor for the given options.
    pub fn new(options: ExtractOptions) -> Self {
        let table = options.table.clone();
        Self {
            segmenter: Segmenter::new(),
            splitter: ChoiceSplitter::new(),
            repairer: RepairPipeline::new(table.clone()),
            classifier: Classifier::new(table),
            whitespace: Regex::new(r"\s+").unwrap(),
            number_prefix: Regex::new(r"^\s*\d+\.\s*").unwrap(),
            options,
        }
    }

    /// Extract problems from a PDF file.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ProblemRecord>> {
        let text = pdf::extract_text(path)?;
        self.extract_from_text(&text)
    }

    /// Extract problems from already-extracted text.
    ///
    /// Fails with [`Error::NoProblems`] when no numbered line at or above the
    /// start threshold is found; this is distinct from an I/O failure.
    pub fn extract_from_text(&self, text: &str) -> Result<Vec<ProblemRecord>> {
        let spans = self.segmenter.segment(text, self.options.start_problem);
        if spans.is_empty() {
            return Err(Error::NoProblems);
        }
        info!(
            "found {} problems starting from problem {}",
            spans.len(),
            self.options.start_problem
        );

        let records: Vec<ProblemRecord> =
            spans.iter().map(|span| self.build_record(span)).collect();

        // Last-chance cleanup over the assembled batch, by functional update.
        Ok(records
            .into_iter()
            .map(|record| ProblemRecord {
                problem: self.repairer.final_fixup(&record.problem),
                ..record
            })
            .collect())
    }

    /// Build one record: flatten, classify, split choices, repair, validate.
    fn build_record(&self, span: &ProblemSpan) -> ProblemRecord {
        let flat = self.whitespace.replace_all(&span.text, " ");
        let body = self.number_prefix.replace(flat.trim(), "").to_string();

        let category = self.classifier.category(&body);
        let difficulty = self.classifier.difficulty(span.number, &body);

        let with_choices = self.splitter.split(&body);
        let problem = self.repairer.process(&with_choices);

        let record = ProblemRecord {
            id: span.number,
            category,
            difficulty,
            problem,
        };

        let violations = validate(&record, &self.options.rules);
        if !violations.is_empty() {
            let summary: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            warn!("problem {} has validation issues: {}", record.id, summary.join("; "));
        }
        info!("parsed problem {}", record.id);

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn extractor() -> ProblemExtractor {
        ProblemExtractor::new(ExtractOptions::default())
    }

    #[test]
    fn test_options_builder() {
        let options = ExtractOptions::new()
            .with_start_problem(18)
            .with_rules(ValidationRules { min_problem_length: 5, max_problem_length: 100 });

        assert_eq!(options.start_problem, 18);
        assert_eq!(options.rules.min_problem_length, 5);
    }

    #[test]
    fn test_empty_text_is_no_problems() {
        let result = extractor().extract_from_text("no numbered lines here");
        assert!(matches!(result, Err(Error::NoProblems)));
    }

    #[test]
    fn test_single_problem_with_choices() {
        let records = extractor()
            .extract_from_text("5. What is 2+2? (A) 3 (B) 4 (C) 5")
            .unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, 5);
        assert_eq!(record.category, "Mathematics");
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert_eq!(record.problem, "What is 2+2?\n\nChoices:\n(A) 3\n(B) 4\n(C) 5");
    }

    #[test]
    fn test_multiline_body_is_flattened() {
        let records = extractor()
            .extract_from_text("1. A problem\nthat wraps\nacross lines.")
            .unwrap();
        assert_eq!(records[0].problem, "A problem that wraps across lines.");
    }

    #[test]
    fn test_number_prefix_stripped() {
        let records = extractor().extract_from_text("12. Compute the value.").unwrap();
        assert!(!records[0].problem.starts_with("12."));
        assert_eq!(records[0].problem, "Compute the value.");
    }

    #[test]
    fn test_threshold_filters_ids() {
        let options = ExtractOptions::new().with_start_problem(10);
        let records = ProblemExtractor::new(options)
            .extract_from_text("9. Too early.\n10. Just right.\n11. Also fine.")
            .unwrap();

        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_short_problem_still_emitted() {
        // 9-char body is flagged by validation but never dropped.
        let records = extractor().extract_from_text("1. Add 2+2.").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].problem, "Add 2+2.");
    }

    #[test]
    fn test_classification_applied_per_problem() {
        let text = "17. Find the derivative of f.\n18. Let G be a group of order 6.";
        let records = extractor().extract_from_text(text).unwrap();

        assert_eq!(records[0].category, "Calculus");
        assert_eq!(records[0].difficulty, Difficulty::Medium);
        assert_eq!(records[1].category, "Abstract Algebra");
        assert_eq!(records[1].difficulty, Difficulty::Easy);
    }
}
