// WHY: Core types for active-sentence detection, shared by the resolver and projector
// Configuration is an explicit immutable value so every scan is a pure function of its inputs

pub mod titles;
pub mod resolver;
pub mod projector;

// Re-export core types
pub use titles::{TitleChecker, DEFAULT_TITLES};
pub use resolver::resolve;
pub use projector::{active_sentence_range, project, HighlightRole, HighlightSpan};

/// Default characters that terminate a sentence
pub const DEFAULT_SENTENCE_DELIMITERS: &str = ".!?";

/// Default characters that may trail a delimiter (markdown emphasis, curly quotes)
pub const DEFAULT_EXTRA_CHARACTERS: &str = "*\u{201C}\u{201D}\u{2018}\u{2019}";

/// Configuration for active-sentence boundary detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceConfig {
    /// Characters that can terminate a sentence, in configured order
    pub sentence_delimiters: Vec<char>,
    /// Characters that may trail a delimiter and still belong to the sentence
    pub extra_characters: Vec<char>,
    /// Abbreviations whose trailing delimiter is not a sentence boundary
    pub titles: TitleChecker,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_SENTENCE_DELIMITERS,
            DEFAULT_EXTRA_CHARACTERS,
            TitleChecker::new(DEFAULT_TITLES.iter().copied()),
        )
    }
}

impl SentenceConfig {
    /// Build a configuration from raw delimiter strings, one character per entry
    /// WHY: Sets are tiny, so an ordered de-duplicated list keeps settings round-trips exact
    pub fn new(sentence_delimiters: &str, extra_characters: &str, titles: TitleChecker) -> Self {
        Self {
            sentence_delimiters: unique_chars(sentence_delimiters),
            extra_characters: unique_chars(extra_characters),
            titles,
        }
    }

    pub fn is_delimiter(&self, ch: char) -> bool {
        self.sentence_delimiters.contains(&ch)
    }

    pub fn is_extra_character(&self, ch: char) -> bool {
        self.extra_characters.contains(&ch)
    }

    /// Titles whose last character is not a delimiter and therefore never suppress a break
    pub fn inert_titles(&self) -> Vec<&str> {
        self.titles
            .iter()
            .filter(|title| !title.chars().last().is_some_and(|ch| self.is_delimiter(ch)))
            .collect()
    }
}

fn unique_chars(raw: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(raw.len());
    for ch in raw.chars() {
        if !chars.contains(&ch) {
            chars.push(ch);
        }
    }
    chars
}

/// Immutable view of one document line
///
/// Offsets are absolute document positions counted in `char`s; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub start: usize,
    pub text: &'a str,
    pub end: usize,
}

impl<'a> Line<'a> {
    pub fn new(start: usize, text: &'a str) -> Self {
        Self {
            start,
            text,
            end: start + text.chars().count(),
        }
    }

    /// Number of characters on the line
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Clamp an absolute position into `[start, end]`
    pub fn clamp(&self, pos: usize) -> usize {
        pos.clamp(self.start, self.end)
    }

    /// Text between two absolute offsets, clamped to the line
    pub fn text_between(&self, from: usize, to: usize) -> String {
        let from = self.clamp(from);
        let to = self.clamp(to).max(from);
        self.text
            .chars()
            .skip(from - self.start)
            .take(to - from)
            .collect()
    }
}

/// End of a sentence as found by the forward scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceEnd {
    /// Absolute offset just past the terminator and any absorbed trailing characters
    Closed(usize),
    /// No terminator before the end of the line
    Open,
}

/// Bounds of the sentence enclosing a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceBounds {
    pub start: usize,
    pub end: SentenceEnd,
}

impl SentenceBounds {
    pub fn is_open(&self) -> bool {
        self.end == SentenceEnd::Open
    }

    /// Effective end, substituting `line_end` for an open end
    pub fn end_or(&self, line_end: usize) -> usize {
        match self.end {
            SentenceEnd::Closed(end) => end,
            SentenceEnd::Open => line_end,
        }
    }
}
