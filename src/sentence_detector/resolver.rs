// WHY: Two linear scans around the cursor find the enclosing sentence within a single line
// Bounded by the line length and the cursor, so every input terminates without error

use tracing::debug;

use super::{Line, SentenceBounds, SentenceConfig, SentenceEnd};

/// Resolve the bounds of the sentence enclosing `pos` on `line`
///
/// `pos` is an absolute offset and is clamped into `[line.start, line.end]`.
/// The returned end is [`SentenceEnd::Open`] when no terminator follows the cursor.
pub fn resolve(line: &Line<'_>, pos: usize, config: &SentenceConfig) -> SentenceBounds {
    let chars: Vec<char> = line.text.chars().collect();
    let cursor = line.clamp(pos) - line.start;

    let start = find_sentence_start(&chars, cursor, config);
    let end = find_sentence_end(&chars, cursor, config);

    debug!(line_start = line.start, cursor, start, ?end, "Resolved sentence bounds");

    SentenceBounds {
        start: line.start + start,
        end: match end {
            Some(end) => SentenceEnd::Closed(line.start + end),
            None => SentenceEnd::Open,
        },
    }
}

/// Scan left from the cursor for the delimiter closing the previous sentence
fn find_sentence_start(chars: &[char], cursor: usize, config: &SentenceConfig) -> usize {
    for i in (0..cursor).rev() {
        if !config.is_delimiter(chars[i]) || config.titles.title_ends_at(chars, i) {
            continue;
        }

        let mut offset = 1;

        // Don't highlight spaces between sentences
        while i + offset < cursor && chars[i + offset] == ' ' {
            offset += 1;
        }

        // Closing quote or emphasis marker right after the previous terminator
        while i + offset < cursor
            && config.is_extra_character(chars[i + offset])
            && config.is_delimiter(chars[i + offset - 1])
        {
            offset += 1;
        }

        return i + offset;
    }

    0
}

/// Scan right from the cursor for the delimiter ending this sentence
fn find_sentence_end(chars: &[char], cursor: usize, config: &SentenceConfig) -> Option<usize> {
    for i in cursor..chars.len() {
        if !config.is_delimiter(chars[i]) || config.titles.title_ends_at(chars, i) {
            continue;
        }

        let mut offset = 1;

        // Ellipses, "?!" and other runs of terminators
        while i + offset < chars.len() && config.is_delimiter(chars[i + offset]) {
            offset += 1;
        }

        while i + offset < chars.len() && config.is_extra_character(chars[i + offset]) {
            offset += 1;
        }

        return Some(i + offset);
    }

    None
}
