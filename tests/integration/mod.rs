#![allow(dead_code)]

// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use focus_sentence::{HighlightRole, HighlightSpan, Line};

/// Test fixture helper for creating temporary settings and document files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a file under the fixture root, creating parent directories
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Text of the active-sentence span, if any
pub fn active_sentence_text(line: &Line<'_>, spans: &[HighlightSpan]) -> Option<String> {
    spans
        .iter()
        .find(|span| span.role == HighlightRole::ActiveSentence)
        .map(|span| line.text_between(span.from, span.to))
}

/// Lines covering typical prose, markup and degenerate cases
pub const SAMPLE_LINES: &[&str] = &[
    "",
    ".",
    "...",
    "Hello. World.",
    "Mr. Smith left. He returned.",
    "Wait... really? Yes.",
    "Final thought with no terminator",
    "He said \u{201C}stop.\u{201D} Then *left.* Done.",
    "   Leading spaces. And trailing.   ",
    "?!?! What?! Ms. Jones asked Mrs. Lee... Why",
    "Caf\u{e9} au lait. Na\u{ef}ve r\u{e9}sum\u{e9}!",
];
