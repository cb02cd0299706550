//! Test classifier — records every word it is asked about.

use std::collections::HashSet;
use std::sync::Mutex;

use shiritori_core::classifier::PartOfSpeechClassifier;

/// Classifies exactly the listed words (compared verbatim, no kana folding)
/// as verbs or adjectives, and remembers each query in order.
#[derive(Debug, Default)]
pub struct DenyListClassifier {
    denied: HashSet<String>,
    queried: Mutex<Vec<String>>,
}

impl DenyListClassifier {
    /// Create a classifier that flags `words`.
    #[must_use]
    pub fn new(words: &[&str]) -> Self {
        Self {
            denied: words.iter().map(|w| (*w).to_owned()).collect(),
            queried: Mutex::new(Vec::new()),
        }
    }

    /// Returns every word passed to `is_verb_or_adjective`, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

impl PartOfSpeechClassifier for DenyListClassifier {
    fn is_verb_or_adjective(&self, word: &str) -> bool {
        self.queried.lock().unwrap().push(word.to_owned());
        self.denied.contains(word)
    }
}
