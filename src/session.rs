// WHY: Host-editor adapter state: current spans plus the "highlighting active" flag
// Scrolling hides the dimming until the next edit or cursor move

use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::document::Document;
use crate::sentence_detector::{project, HighlightSpan, SentenceConfig};

/// Editor selection in absolute char offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    /// Collapsed selection at `pos`
    pub fn cursor(pos: usize) -> Self {
        Self { anchor: pos, head: pos }
    }

    /// Lower bound of the selection; the projection cursor
    pub fn from(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn to(&self) -> usize {
        self.anchor.max(self.head)
    }
}

/// Host events that drive highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    DocumentChanged,
    SelectionChanged,
    Scrolled,
}

/// Per-editor highlighting state
#[derive(Debug)]
pub struct FocusSession {
    config: Arc<SentenceConfig>,
    spans: Vec<HighlightSpan>,
    active: bool,
}

impl FocusSession {
    /// Create an inactive session with no spans
    pub fn new(config: Arc<SentenceConfig>) -> Self {
        Self {
            config,
            spans: Vec::new(),
            active: false,
        }
    }

    /// Compute initial spans without activating the highlight
    ///
    /// # Errors
    /// Returns an error when the selection lies beyond the document.
    pub fn attach(&mut self, doc: &Document, selection: Selection) -> Result<()> {
        self.spans = Self::compute(doc, selection, &self.config)?;
        Ok(())
    }

    /// Apply a host event
    ///
    /// Edits and selection moves recompute the spans from scratch and activate
    /// highlighting; scrolling only deactivates it.
    ///
    /// # Errors
    /// Returns an error when the selection lies beyond the document.
    pub fn handle(&mut self, event: FocusEvent, doc: &Document, selection: Selection) -> Result<&[HighlightSpan]> {
        match event {
            FocusEvent::DocumentChanged | FocusEvent::SelectionChanged => {
                self.spans = Self::compute(doc, selection, &self.config)?;
                self.active = true;
            }
            FocusEvent::Scrolled => {
                self.active = false;
            }
        }

        debug!(?event, active = self.active, spans = self.spans.len(), "Handled focus event");
        Ok(&self.spans)
    }

    fn compute(doc: &Document, selection: Selection, config: &SentenceConfig) -> Result<Vec<HighlightSpan>> {
        let pos = selection.from();
        let line = doc.line_at(pos)?;
        Ok(project(&line, pos, config))
    }

    /// Swap in new settings; takes effect on the next event
    pub fn replace_config(&mut self, config: Arc<SentenceConfig>) {
        self.config = config;
    }

    pub fn config(&self) -> &SentenceConfig {
        &self.config
    }

    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
