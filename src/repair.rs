//! Notation repair pipeline for corrupted PDF math text.
//!
//! The stages run in a fixed order and the order is load-bearing: literal
//! token fixes must precede the glyph substitutions, choice reformatting must
//! precede the delimiter work, and the whitespace collapse always runs last.
//! The pipeline is idempotent in intent but not formally: a first pass may
//! merge adjacent `$` spans or wrap bare commands, after which a second pass
//! leaves the text unchanged.

use crate::parse::ChoiceSplitter;
use crate::symbols::SymbolTable;
use regex::{Regex, RegexBuilder};
use unicode_normalization::UnicodeNormalization;

/// Ordered text-to-text repair passes for one problem body.
pub struct RepairPipeline {
    table: SymbolTable,
    splitter: ChoiceSplitter,
    artifact_patterns: Vec<Regex>,
    int_missing_bounds: Regex,
    int_bare_bound: Regex,
    doubled_command: Regex,
    duplicate_choices: Regex,
    choice_label: Regex,
    blank_lines: Regex,
    nested_repairs: Vec<(Regex, &'static str)>,
    wrap_patterns: Vec<Regex>,
    hspace: Regex,
    line_edges: Regex,
    newline_runs: Regex,
}

impl RepairPipeline {
    /// Create a pipeline with all patterns compiled up front.
    pub fn new(table: SymbolTable) -> Self {
        let artifact_patterns = table
            .artifact_patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .multi_line(true)
                    .build()
                    .unwrap()
            })
            .collect();

        // Known-malformed nested delimiter forms, tried in order.
        let nested_repairs = vec![
            (
                Regex::new(r"\$\\sqrt\{\$\\pi\$\}\$").unwrap(),
                r"$$\sqrt{\pi}$$",
            ),
            (
                Regex::new(r"\$\\frac\{\$\\sqrt\{\$\\pi\$\}\$\}\{([^}]+)\}\$").unwrap(),
                r"$$\frac{\sqrt{\pi}}{${1}}$$",
            ),
            (
                Regex::new(r"\$\\int_\$\{([^}]*)\}\^\{\$\\in\$fty\}").unwrap(),
                r"$$\int_0^{\infty}$$",
            ),
            (
                Regex::new(r"\$\\int_\$\{-\$\\in\$fty\}\^\{\$\\in\$fty\}").unwrap(),
                r"$$\int_{-\infty}^{\infty}$$",
            ),
            (
                Regex::new(r"\$\\frac\{\$\\pi\$\}\{([^}]+)\}\$").unwrap(),
                r"$$\frac{\pi}{${1}}$$",
            ),
            (Regex::new(r"2\$\\sqrt\{\$\\pi\$\}\$").unwrap(), r"$$2\sqrt{\pi}$$"),
            (Regex::new(r"4\$\\sqrt\{\$\\pi\$\}\$").unwrap(), r"$$4\sqrt{\pi}$$"),
            (Regex::new(r"\$\\cos\$\^3").unwrap(), r"$$\cos^3$$"),
            (Regex::new(r"\$\\sin\$\^3").unwrap(), r"$$\sin^3$$"),
            // Merge runs of nested/adjacent delimiters into a single span.
            (
                Regex::new(r"\$([^$]*)\$([^$]*)\$([^$]*)\$").unwrap(),
                r"$$${1}${2}${3}$$",
            ),
            (Regex::new(r"\$\$+").unwrap(), r"$$"),
        ];

        // Complete bare expressions worth wrapping, most structured first.
        let wrap_patterns = [
            r"\\frac\{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}\{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}",
            r"\\sqrt\{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}",
            r"\\int_\S*\^\S*\s*\S*\s*dx",
            r"\\int_\S*\s*\S*\s*dx",
            r"\\int\s*\S*\s*dx",
            r"\\(?:sin|cos|tan)(?:\^[0-9]+)?\s*[a-zA-Z]*",
            r"\\(?:pi|alpha|beta|gamma|delta|theta|lambda|mu|sigma|phi|omega)",
            r"\\(?:leq|geq|neq|approx|equiv|in|subset|cup|cap|infty)",
            r"\\mathbb\{[RQNCZH]\}",
            r"\\frac\{\\sqrt\{\\pi\}\}\{2\}",
            r"\\frac\{\\sqrt\{\\pi\}\}\{4\}",
            r"2\\sqrt\{\\pi\}",
            r"4\\sqrt\{\\pi\}",
            r"\\sqrt\{\\pi\}",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect();

        Self {
            splitter: ChoiceSplitter::new(),
            artifact_patterns,
            int_missing_bounds: Regex::new(r"\\int\s*\\infty").unwrap(),
            int_bare_bound: Regex::new(r"\\int\s*(\d+)").unwrap(),
            doubled_command: Regex::new(r"\\\\(frac|sum|int|lim|log|ln|sqrt)").unwrap(),
            duplicate_choices: Regex::new(r"Choices:\s*Choices:\s*").unwrap(),
            choice_label: Regex::new(r"\s*\(([A-E])\)\s*").unwrap(),
            blank_lines: Regex::new(r"\n\s*\n").unwrap(),
            nested_repairs,
            wrap_patterns,
            hspace: Regex::new(r"[^\S\n]+").unwrap(),
            line_edges: Regex::new(r" *\n *").unwrap(),
            newline_runs: Regex::new(r"\n{3,}").unwrap(),
            table,
        }
    }

    /// Run the full repair sequence over one problem body.
    pub fn process(&self, text: &str) -> String {
        let mut result: String = text.nfc().collect();

        result = self.remove_artifacts(&result);
        result = self.strip_artifact_chars(&result);
        result = self.fix_notation(&result);
        result = self.apply_symbol_replacements(&result);
        result = self.fix_choice_formatting(&result);
        result = self.fix_delimiter_spacing(&result);
        result = self.wrap_or_repair_math(&result);
        self.collapse_whitespace(&result)
    }

    /// Reduced last-chance cleanup applied once all records are assembled:
    /// spacing, choice layout, and the whitespace collapse only.
    pub fn final_fixup(&self, text: &str) -> String {
        let mut result = self.fix_delimiter_spacing(text);
        result = self.fix_choice_formatting(&result);
        self.collapse_whitespace(&result)
    }

    /// Stage 1: strip configured boilerplate (headers, footers, copyright).
    fn remove_artifacts(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pattern in &self.artifact_patterns {
            result = pattern.replace_all(&result, "").to_string();
        }
        result
    }

    /// Stage 2: drop stray extraction characters outright.
    fn strip_artifact_chars(&self, text: &str) -> String {
        text.chars()
            .filter(|c| !self.table.unicode_artifacts.contains(c))
            .collect()
    }

    /// Stage 3: literal token fixes, then integral-bound and doubled-command
    /// regex repairs.
    fn fix_notation(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (from, to) in self.table.notation_fixes {
            result = result.replace(from, to);
        }

        let result = self.int_missing_bounds.replace_all(&result, r"\int_0^{\infty}");
        let result = self.int_bare_bound.replace_all(&result, r"\int_0^{${1}}");
        let result = self.doubled_command.replace_all(&result, r"\${1}");
        result.to_string()
    }

    /// Stage 4: glyph-to-LaTeX substitutions in table order.
    fn apply_symbol_replacements(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (from, to) in self.table.symbol_replacements {
            result = result.replace(from, to);
        }
        result
    }

    /// Stage 5: guarantee a newline-separated choice block.
    ///
    /// With an explicit `Choices:` heading the tail is reflowed in place;
    /// without one, choices mixed into narrative text are re-extracted.
    fn fix_choice_formatting(&self, text: &str) -> String {
        let text = self.duplicate_choices.replace_all(text, "Choices:\n").to_string();

        if let Some(pos) = text.find("Choices:") {
            let stem = text[..pos].trim_end();
            let tail = &text[pos + "Choices:".len()..];

            let formatted = self.choice_label.replace_all(tail.trim(), "\n(${1}) ");
            let formatted = self.blank_lines.replace_all(&formatted, "\n");
            return format!("{}\n\nChoices:\n{}", stem, formatted.trim());
        }

        self.splitter.rejoin(&text)
    }

    /// Stage 6: word-plus-delimiter adjacency fixes.
    fn fix_delimiter_spacing(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (from, to) in self.table.spacing_fixes {
            result = result.replace(from, to);
        }
        result
    }

    /// Stage 7: wrap bare math, or repair malformed nesting.
    ///
    /// The branches are mutually exclusive per invocation: any `$` anywhere
    /// routes the whole text to the nested-repair branch, even if most of the
    /// text has no math at all. Documented limitation, kept as observed.
    fn wrap_or_repair_math(&self, text: &str) -> String {
        if text.contains('$') {
            self.repair_nested_delimiters(text)
        } else {
            self.wrap_bare_math(text)
        }
    }

    fn repair_nested_delimiters(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (pattern, replacement) in &self.nested_repairs {
            result = pattern.replace_all(&result, *replacement).to_string();
        }
        result
    }

    fn wrap_bare_math(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pattern in &self.wrap_patterns {
            let spans: Vec<(usize, usize)> =
                pattern.find_iter(&result).map(|m| (m.start(), m.end())).collect();

            // Insert back-to-front so earlier spans stay valid; skip matches
            // already touching a delimiter.
            for &(start, end) in spans.iter().rev() {
                let bytes = result.as_bytes();
                let before = start.checked_sub(1).map(|i| bytes[i]);
                let after = bytes.get(end).copied();
                if before == Some(b'$') || after == Some(b'$') {
                    continue;
                }
                result.insert(end, '$');
                result.insert(start, '$');
            }
        }
        result
    }

    /// Stage 8: collapse horizontal whitespace runs and clamp newline runs to
    /// a blank line. Newlines themselves are preserved; the choice block
    /// layout depends on them.
    fn collapse_whitespace(&self, text: &str) -> String {
        let result = self.hspace.replace_all(text, " ");
        let result = self.line_edges.replace_all(&result, "\n");
        let result = self.newline_runs.replace_all(&result, "\n\n");
        result.trim().to_string()
    }
}

impl Default for RepairPipeline {
    fn default() -> Self {
        Self::new(SymbolTable::default())
    }
}
