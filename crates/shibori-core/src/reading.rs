//! Phrase-to-reading resolution against a static dictionary.
//!
//! A best-effort heuristic, not a morphological analyzer: an input either
//! matches a dictionary phrase exactly, or has the first known sub-phrase
//! replaced by its reading, or comes back unchanged.

use serde::Deserialize;

use crate::unicode;

pub const DEFAULT_READINGS_TOML: &str = include_str!("default_readings.toml");

#[derive(Deserialize)]
struct ReadingConfig {
    words: Vec<WordEntry>,
}

#[derive(Deserialize)]
struct WordEntry {
    text: String,
    reading: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[words]] list is empty")]
    Empty,
    #[error("empty phrase text in entry {0}")]
    EmptyText(usize),
    #[error("reading for {0:?} is not hiragana")]
    NotHiragana(String),
}

/// Insertion-ordered phrase → reading mapping. Earlier entries win both the
/// exact-match and the substring scan, so the shipped table lists longer
/// compounds before the shorter phrases they contain.
#[derive(Debug)]
pub struct ReadingDictionary {
    entries: Vec<(String, String)>,
}

impl ReadingDictionary {
    pub fn from_toml(toml_str: &str) -> Result<Self, ReadingConfigError> {
        let config: ReadingConfig =
            toml::from_str(toml_str).map_err(|e| ReadingConfigError::Parse(e.to_string()))?;

        if config.words.is_empty() {
            return Err(ReadingConfigError::Empty);
        }
        for (i, entry) in config.words.iter().enumerate() {
            if entry.text.is_empty() {
                return Err(ReadingConfigError::EmptyText(i));
            }
            if !unicode::is_hiragana_reading(&entry.reading) {
                return Err(ReadingConfigError::NotHiragana(entry.text.clone()));
            }
        }

        Ok(Self {
            entries: config
                .words
                .into_iter()
                .map(|w| (w.text, w.reading))
                .collect(),
        })
    }

    /// An empty dictionary. `resolve` degrades to identity.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `text` to a phonetic reading.
    ///
    /// NFKC-normalizes and trims, then: an exact phrase match returns the
    /// reading itself; otherwise the first dictionary entry (in defined
    /// order) found as a substring has only its first occurrence replaced.
    /// No recursion into the remainder, no global replace. Unknown text
    /// comes back normalized but otherwise unchanged.
    pub fn resolve(&self, text: &str) -> String {
        let normalized = unicode::nfkc_trim(text);

        if let Some((_, reading)) = self.entries.iter().find(|(t, _)| *t == normalized) {
            return reading.clone();
        }

        for (phrase, reading) in &self.entries {
            if normalized.contains(phrase.as_str()) {
                return normalized.replacen(phrase.as_str(), reading, 1);
            }
        }

        normalized
    }
}

impl Default for ReadingDictionary {
    fn default() -> Self {
        Self::from_toml(DEFAULT_READINGS_TOML).expect("embedded readings TOML must be valid")
    }
}
