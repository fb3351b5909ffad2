// WHY: Persisted settings stay as the raw strings a settings UI edits
// Parsing into character sets happens once, producing an immutable SentenceConfig

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::sentence_detector::{
    SentenceConfig, TitleChecker, DEFAULT_EXTRA_CHARACTERS, DEFAULT_SENTENCE_DELIMITERS,
    DEFAULT_TITLES,
};

/// Raw, persisted focus settings
/// WHY: Missing keys take their defaults so older settings files keep loading
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FocusSettings {
    /// Characters that mark the end of a sentence
    pub sentence_delimiters: String,
    /// Characters that may follow the end of a sentence and belong to it
    pub extra_characters: String,
    /// Newline-separated titles whose trailing delimiter is ignored
    pub titles: String,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            sentence_delimiters: DEFAULT_SENTENCE_DELIMITERS.to_string(),
            extra_characters: DEFAULT_EXTRA_CHARACTERS.to_string(),
            titles: DEFAULT_TITLES.join("\n"),
        }
    }
}

impl FocusSettings {
    /// Load settings from a JSON file, merging stored values over defaults
    /// WHY: Graceful fallback; a broken settings file must not disable highlighting
    pub async fn load(path: &Path) -> Self {
        match fs::read_to_string(path).await {
            Ok(content) => Self::from_json(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                info!("No settings at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON, filling absent keys with defaults
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save settings as pretty JSON
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(path, content).await?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Default settings file location inside a directory
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join("focus-sentence.json")
    }

    pub fn with_sentence_delimiters(&self, sentence_delimiters: impl Into<String>) -> Self {
        Self {
            sentence_delimiters: sentence_delimiters.into(),
            ..self.clone()
        }
    }

    pub fn with_extra_characters(&self, extra_characters: impl Into<String>) -> Self {
        Self {
            extra_characters: extra_characters.into(),
            ..self.clone()
        }
    }

    pub fn with_titles(&self, titles: impl Into<String>) -> Self {
        Self {
            titles: titles.into(),
            ..self.clone()
        }
    }

    /// Split raw strings into the immutable detection configuration
    pub fn to_config(&self) -> SentenceConfig {
        let config = SentenceConfig::new(
            &self.sentence_delimiters,
            &self.extra_characters,
            TitleChecker::from_lines(&self.titles),
        );

        // WHY: Documented precondition only; such titles are kept but can never match
        for title in config.inert_titles() {
            warn!(title, "Title does not end with a sentence delimiter and will not suppress breaks");
        }

        config
    }
}

impl From<&SentenceConfig> for FocusSettings {
    fn from(config: &SentenceConfig) -> Self {
        Self {
            sentence_delimiters: config.sentence_delimiters.iter().collect(),
            extra_characters: config.extra_characters.iter().collect(),
            titles: config.titles.to_lines(),
        }
    }
}
