//! Part-of-speech classification seam.
//!
//! Shiritori only admits nouns. Deciding whether a word is a verb or an
//! adjective needs a morphological analyzer that lives outside the referee;
//! the rules only consume the boolean answer.

/// Predicate over the raw (not normalized) candidate word.
pub trait PartOfSpeechClassifier: Send + Sync {
    /// Returns `true` if `word` is a verb or an adjective.
    fn is_verb_or_adjective(&self, word: &str) -> bool;
}
