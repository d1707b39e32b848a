//! Numbered-line segmentation of extracted text.

use regex::Regex;

/// A contiguous run of document lines belonging to one numbered problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemSpan {
    /// Problem number parsed from the leading `N.` marker
    pub number: u32,

    /// Raw span text, lines joined with newlines
    pub text: String,
}

/// Splits a raw text blob into per-problem spans.
///
/// A line opens a new span iff it matches `^\s*(\d+)\.\s*`. Spans are bounded
/// by the next qualifying line or the end of the document.
pub struct Segmenter {
    marker: Regex,
}

impl Segmenter {
    /// Create a segmenter with the standard `N.` line marker.
    pub fn new() -> Self {
        Self {
            marker: Regex::new(r"^\s*(\d+)\.\s*").unwrap(),
        }
    }

    /// Split `text` into problem spans, keeping only problems numbered at or
    /// above `start_problem`.
    ///
    /// Lines below the threshold are discarded entirely: they neither open
    /// nor bound a retained span. A body line that happens to start with
    /// `N.` (a sub-item, say) incorrectly opens a new span; no monotonicity
    /// check is applied.
    pub fn segment(&self, text: &str, start_problem: u32) -> Vec<ProblemSpan> {
        let lines: Vec<&str> = text.split('\n').collect();

        let mut positions: Vec<(u32, usize)> = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if let Some(caps) = self.marker.captures(line) {
                // Unparseable (overflowing) numbers do not open a span.
                if let Ok(number) = caps[1].parse::<u32>() {
                    if number >= start_problem {
                        positions.push((number, i));
                    }
                }
            }
        }

        positions
            .iter()
            .enumerate()
            .map(|(i, &(number, start))| {
                let end = positions.get(i + 1).map(|&(_, line)| line).unwrap_or(lines.len());
                ProblemSpan {
                    number,
                    text: lines[start..end].join("\n"),
                }
            })
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}
