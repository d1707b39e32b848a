//! Category and difficulty assignment.

use crate::model::Difficulty;
use crate::symbols::SymbolTable;

/// Assigns subject categories and difficulty levels from problem content.
pub struct Classifier {
    table: SymbolTable,
}

impl Classifier {
    /// Create a classifier over the given keyword tables.
    pub fn new(table: SymbolTable) -> Self {
        Self { table }
    }

    /// Return the first category whose keyword set matches a substring of the
    /// lowercased text, or the default tag when none does.
    pub fn category(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        for (category, keywords) in self.table.category_keywords {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                return (*category).to_string();
            }
        }
        self.table.default_category.to_string()
    }

    /// Compute the difficulty for a problem.
    ///
    /// The base level comes from the problem number's range; the first
    /// matching complexity-indicator set (tested Hard, Medium, Easy) overrides
    /// it.
    pub fn difficulty(&self, problem_number: u32, text: &str) -> Difficulty {
        let lower = text.to_lowercase();
        for (level, indicators) in self.table.complexity_indicators {
            if indicators.iter().any(|indicator| lower.contains(indicator)) {
                return *level;
            }
        }
        self.base_difficulty(problem_number)
    }

    fn base_difficulty(&self, problem_number: u32) -> Difficulty {
        for (lo, hi, level) in self.table.difficulty_ranges {
            if (*lo..=*hi).contains(&problem_number) {
                return *level;
            }
        }
        Difficulty::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(SymbolTable::default())
    }

    #[test]
    fn test_category_keyword_match() {
        assert_eq!(classifier().category("Find the derivative of f."), "Calculus");
        assert_eq!(classifier().category("What is the chromatic number of this graph?"), "Graph Theory");
        assert_eq!(classifier().category("Let G be a group of order 6."), "Abstract Algebra");
    }

    #[test]
    fn test_category_default() {
        assert_eq!(classifier().category("What is 2+2?"), "Mathematics");
    }

    #[test]
    fn test_category_first_listed_wins() {
        // "complex" (Complex Analysis) is declared before "matrix"
        // (Linear Algebra).
        let text = "Consider a complex matrix.";
        assert_eq!(classifier().category(text), "Complex Analysis");
    }

    #[test]
    fn test_category_is_case_insensitive() {
        assert_eq!(classifier().category("EVALUATE THE INTEGRAL."), "Calculus");
    }

    #[test]
    fn test_difficulty_base_ranges() {
        let classifier = classifier();
        assert_eq!(classifier.difficulty(1, "xyz"), Difficulty::Easy);
        assert_eq!(classifier.difficulty(20, "xyz"), Difficulty::Easy);
        assert_eq!(classifier.difficulty(21, "xyz"), Difficulty::Medium);
        assert_eq!(classifier.difficulty(45, "xyz"), Difficulty::Medium);
        assert_eq!(classifier.difficulty(46, "xyz"), Difficulty::Hard);
        assert_eq!(classifier.difficulty(100, "xyz"), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_fallback_above_ranges() {
        assert_eq!(classifier().difficulty(101, "xyz"), Difficulty::Medium);
    }

    #[test]
    fn test_indicator_overrides_range() {
        // Problem 17 would be Easy by range; "derivative" forces Medium.
        let level = classifier().difficulty(17, "Find the derivative of f.");
        assert_eq!(level, Difficulty::Medium);
    }

    #[test]
    fn test_indicator_order_hard_first() {
        // Both "theorem" (Hard) and "find" (Easy) appear; Hard is tested
        // first.
        let level = classifier().difficulty(3, "Find a proof of the theorem.");
        assert_eq!(level, Difficulty::Hard);
    }

    #[test]
    fn test_easy_indicator_applies() {
        let level = classifier().difficulty(60, "What is the remainder?");
        assert_eq!(level, Difficulty::Easy);
    }
}
