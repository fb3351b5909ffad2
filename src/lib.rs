pub mod sentence_detector;
pub mod document;
pub mod session;
pub mod settings;

// Re-export main types for convenient access
pub use sentence_detector::{
    active_sentence_range, project, resolve,
    HighlightRole, HighlightSpan, Line, SentenceBounds, SentenceConfig, SentenceEnd, TitleChecker
};

// Re-export host adapter types
pub use document::Document;
pub use session::{FocusEvent, FocusSession, Selection};
pub use settings::FocusSettings;
