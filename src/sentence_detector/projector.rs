// WHY: Turns resolved sentence bounds into display spans the host editor can decorate
// Recomputed from scratch per event; lines are short so no incremental diffing

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{resolve, Line, SentenceConfig};

/// Visual role of a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightRole {
    /// The sentence containing the cursor
    ActiveSentence,
    /// Remaining text on the cursor's line
    ActiveParagraph,
}

impl HighlightRole {
    /// CSS-style class name used by host editors
    pub fn class_name(&self) -> &'static str {
        match self {
            HighlightRole::ActiveSentence => "active-sentence",
            HighlightRole::ActiveParagraph => "active-paragraph",
        }
    }
}

/// Highlighted range in absolute offsets, `to` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub from: usize,
    pub to: usize,
    pub role: HighlightRole,
}

impl HighlightSpan {
    pub fn new(from: usize, to: usize, role: HighlightRole) -> Self {
        Self { from, to, role }
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// Resolve the active sentence as a closed `(start, end)` range
///
/// When nothing terminates the sentence after the cursor, the lookup is retried one
/// character to the left so a cursor sitting right after a terminator keeps that
/// sentence active. A still-open end becomes the line end.
pub fn active_sentence_range(line: &Line<'_>, pos: usize, config: &SentenceConfig) -> (usize, usize) {
    let pos = line.clamp(pos);
    let mut bounds = resolve(line, pos, config);

    if bounds.is_open() && pos > line.start {
        bounds = resolve(line, pos - 1, config);
    }

    (bounds.start, bounds.end_or(line.end))
}

/// Project the active sentence at `pos` into ordered, non-overlapping spans
pub fn project(line: &Line<'_>, pos: usize, config: &SentenceConfig) -> Vec<HighlightSpan> {
    let (start, end) = active_sentence_range(line, pos, config);
    let mut spans = Vec::with_capacity(3);

    if start != end {
        if start > line.start {
            spans.push(HighlightSpan::new(line.start, start, HighlightRole::ActiveParagraph));
        }
        spans.push(HighlightSpan::new(start, end, HighlightRole::ActiveSentence));
        if end < line.end {
            spans.push(HighlightSpan::new(end, line.end, HighlightRole::ActiveParagraph));
        }
    } else if !line.is_empty() {
        spans.push(HighlightSpan::new(line.start, line.end, HighlightRole::ActiveParagraph));
    }

    debug!(start, end, spans = spans.len(), "Projected highlight spans");
    spans
}
