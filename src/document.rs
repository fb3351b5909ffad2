// WHY: Host editors hand over a whole document plus a cursor; the detector works per line
// Line starts are indexed once so cursor lookups are a binary search

use anyhow::Result;
use tracing::debug;

use crate::sentence_detector::Line;

/// Byte and char extents of one indexed line
#[derive(Debug, Clone, Copy)]
struct LineEntry {
    /// Absolute char offset of the first character
    start: usize,
    /// Byte range of the line text, excluding the line terminator
    byte_start: usize,
    byte_end: usize,
}

/// Text document indexed by line
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    lines: Vec<LineEntry>,
    char_len: usize,
}

impl Document {
    /// Index `text` into lines separated by `\n`
    ///
    /// A `\r` ending a line, before its `\n` or at the end of the text, is not line text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut lines = Vec::new();
        let mut char_pos = 0;
        let mut line_start = 0;
        let mut byte_start = 0;

        for (byte_pos, ch) in text.char_indices() {
            if ch == '\n' {
                let byte_end = if text[byte_start..byte_pos].ends_with('\r') {
                    byte_pos - 1
                } else {
                    byte_pos
                };
                lines.push(LineEntry { start: line_start, byte_start, byte_end });
                line_start = char_pos + 1;
                byte_start = byte_pos + 1;
            }
            char_pos += 1;
        }
        let byte_end = if text[byte_start..].ends_with('\r') {
            text.len() - 1
        } else {
            text.len()
        };
        lines.push(LineEntry { start: line_start, byte_start, byte_end });

        debug!("Indexed document: {} lines, {} chars", lines.len(), char_pos);

        Self {
            text,
            lines,
            char_len: char_pos,
        }
    }

    /// Total length in chars
    pub fn len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line by 0-based index
    pub fn line(&self, index: usize) -> Option<Line<'_>> {
        self.lines.get(index).map(|entry| self.view(entry))
    }

    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.lines.iter().map(|entry| self.view(entry))
    }

    /// Line containing absolute char offset `pos`
    ///
    /// A position equal to a line's end belongs to that line.
    ///
    /// # Errors
    /// Returns an error when `pos` lies beyond the end of the document.
    pub fn line_at(&self, pos: usize) -> Result<Line<'_>> {
        if pos > self.char_len {
            anyhow::bail!("Cursor offset {} is beyond document length {}", pos, self.char_len);
        }

        let index = self.lines.partition_point(|entry| entry.start <= pos).saturating_sub(1);
        Ok(self.view(&self.lines[index]))
    }

    fn view(&self, entry: &LineEntry) -> Line<'_> {
        Line::new(entry.start, &self.text[entry.byte_start..entry.byte_end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_indexing() {
        let doc = Document::new("First line.\nSecond one.\n\nLast");
        assert_eq!(doc.line_count(), 4);
        assert_eq!(doc.len(), 29);

        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines[0], Line::new(0, "First line."));
        assert_eq!(lines[1], Line::new(12, "Second one."));
        assert_eq!(lines[2], Line::new(24, ""));
        assert_eq!(lines[3], Line::new(25, "Last"));
    }

    #[test]
    fn test_line_at_boundaries() {
        let doc = Document::new("ab\ncd");
        assert_eq!(doc.line_at(0).unwrap().start, 0);
        assert_eq!(doc.line_at(2).unwrap().start, 0, "Line end belongs to its line");
        assert_eq!(doc.line_at(3).unwrap().start, 3);
        assert_eq!(doc.line_at(5).unwrap().text, "cd");
        assert!(doc.line_at(6).is_err());
    }

    #[test]
    fn test_crlf_excluded_from_line_text() {
        let doc = Document::new("One.\r\nTwo.");
        assert_eq!(doc.line(0).unwrap(), Line::new(0, "One."));
        assert_eq!(doc.line(1).unwrap(), Line::new(6, "Two."));
        assert!(doc.line(2).is_none());
    }

    #[test]
    fn test_lone_trailing_cr_excluded_from_last_line() {
        let doc = Document::new("One.\r\nx\r");
        assert_eq!(doc.len(), 8);
        assert_eq!(doc.line(1).unwrap(), Line::new(6, "x"));
        // Cursor on the stray terminator still maps to the last line
        assert_eq!(doc.line_at(8).unwrap().text, "x");
    }

    #[test]
    fn test_multibyte_offsets_are_chars() {
        let doc = Document::new("\u{201C}Hi.\u{201D}\nNext");
        let second = doc.line_at(7).unwrap();
        assert_eq!(second.start, 6);
        assert_eq!(second.text, "Next");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new("");
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_at(0).unwrap(), Line::new(0, ""));
        assert!(doc.line_at(1).is_err());
    }

    #[test]
    fn test_trailing_newline_yields_empty_last_line() {
        let doc = Document::new("Text.\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line_at(6).unwrap(), Line::new(6, ""));
    }
}
