//! Stem/choice separation for multiple-choice problems.

use regex::Regex;

const CHOICE_LETTERS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// Separates a problem body from its enumerated option list.
///
/// Choices are `(X)` labels with X in A..=E; each label captures the text up
/// to the next label or the end of the string.
pub struct ChoiceSplitter {
    label: Regex,
}

impl ChoiceSplitter {
    /// Create a splitter for the standard `(A)`..`(E)` label style.
    pub fn new() -> Self {
        Self {
            label: Regex::new(r"\(([A-E])\)").unwrap(),
        }
    }

    /// Separate a flattened problem body into a stem and a formatted
    /// `Choices:` block.
    ///
    /// Returns the input unchanged when no label is present, or when `(A)` is
    /// absent. `(A)` at index 0 also counts as absent and leaves the whole
    /// text as the stem; this mirrors the source data the pipeline was built
    /// against and is deliberately not corrected.
    pub fn split(&self, text: &str) -> String {
        if !self.label.is_match(text) {
            return text.to_string();
        }

        let anchor = match text.find("(A)") {
            Some(pos) if pos > 0 => pos,
            _ => return text.to_string(),
        };

        self.format_block(&text[..anchor], &text[anchor..])
    }

    /// Re-join choices that are mixed into narrative text.
    ///
    /// Anchors at the first label of any letter and requires at least two
    /// labels; used by the repair pipeline when a problem reaches it without
    /// an explicit `Choices:` heading.
    pub fn rejoin(&self, text: &str) -> String {
        let marks: Vec<usize> = self.label.find_iter(text).map(|m| m.start()).collect();
        if marks.len() < 2 {
            return text.to_string();
        }

        self.format_block(&text[..marks[0]], &text[marks[0]..])
    }

    fn format_block(&self, stem: &str, tail: &str) -> String {
        let choices = self.collect_choices(tail);
        if choices.is_empty() {
            let mut whole = stem.to_string();
            whole.push_str(tail);
            return whole;
        }

        format!("{}\n\nChoices:\n{}", stem.trim(), choices.join("\n"))
    }

    /// Capture each labelled choice in A..=E order, skipping absent labels
    /// and dropping labels with empty text.
    fn collect_choices(&self, tail: &str) -> Vec<String> {
        let marks: Vec<(usize, usize, char)> = self
            .label
            .captures_iter(tail)
            .map(|caps| {
                let m = caps.get(0).unwrap();
                (m.start(), m.end(), caps[1].chars().next().unwrap())
            })
            .collect();

        let mut choices = Vec::new();
        for letter in CHOICE_LETTERS {
            let Some(i) = marks.iter().position(|&(_, _, l)| l == letter) else {
                continue;
            };
            let (_, body_start, _) = marks[i];
            let body_end = marks.get(i + 1).map(|&(start, _, _)| start).unwrap_or(tail.len());

            let body = tail[body_start..body_end].trim();
            if !body.is_empty() {
                choices.push(format!("({}) {}", letter, body));
            }
        }
        choices
    }
}

impl Default for ChoiceSplitter {
    fn default() -> Self {
        Self::new()
    }
}
