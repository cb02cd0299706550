//! Built-in part-of-speech classifiers.

use std::collections::HashSet;
use std::path::Path;

pub use shiritori_core::classifier::PartOfSpeechClassifier;
use shiritori_core::error::DomainError;

use super::kana::to_hiragana;

/// Classifier used when no analyzer is configured: every word is a noun.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllClassifier;

impl PartOfSpeechClassifier for AcceptAllClassifier {
    fn is_verb_or_adjective(&self, _word: &str) -> bool {
        false
    }
}

/// Classifier backed by an explicit list of verbs and adjectives.
///
/// Entries are compared in hiragana, so a list written in either script
/// matches candidates written in either script.
#[derive(Debug, Clone, Default)]
pub struct WordListClassifier {
    entries: HashSet<String>,
}

impl WordListClassifier {
    /// Parses a newline-delimited list. Entries are trimmed; blank lines and
    /// lines starting with `#` are skipped.
    #[must_use]
    pub fn parse(data: &str) -> Self {
        let entries = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(to_hiragana)
            .collect();
        Self { entries }
    }

    /// Reads and parses a list from disk.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Infrastructure(format!(
                "failed to read word list {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self::parse(&data))
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartOfSpeechClassifier for WordListClassifier {
    fn is_verb_or_adjective(&self, word: &str) -> bool {
        self.entries.contains(&to_hiragana(word))
    }
}
