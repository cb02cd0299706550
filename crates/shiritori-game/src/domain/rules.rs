//! Chain rules for a submitted word.
//!
//! Rules run in a fixed order and the first failing rule decides the
//! rejection, so a word that both ends in `ん` and was already used is
//! reported as ending in `ん`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::classifier::PartOfSpeechClassifier;
use super::kana::{SYLLABIC_N, effective_ending, first_char, last_char, to_hiragana};

/// Why a submitted word was refused. Display text is the player-facing
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectionKind {
    /// The word does not start with the previous word's last sound.
    #[error("前の単語に続いていません")]
    NotContinuation,

    /// The word already appears in the history.
    #[error("同じ単語が既に使用されています")]
    AlreadyUsed,

    /// The word ends in `ん`. Ends the game.
    #[error("単語が「ん」で終わっています。ゲーム終了です。")]
    EndsInN,

    /// The word repeats the previous word. Ends the game.
    #[error("同じ単語が連続して入力されました。ゲーム終了です。")]
    RepeatedImmediate,

    /// The word is a verb or an adjective.
    #[error("動詞または形容詞が入力されました。使用できません。")]
    VerbOrAdjective,

    /// The game has already ended; only a reset is accepted.
    #[error("ゲームは終了しています。リセットしてください。")]
    GameOver,
}

impl RejectionKind {
    /// Numeric error code reported to clients.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::NotContinuation => "10001",
            Self::AlreadyUsed => "10003",
            Self::EndsInN => "10004",
            Self::RepeatedImmediate => "10005",
            Self::VerbOrAdjective => "10006",
            Self::GameOver => "10007",
        }
    }

    /// The end reason when this rejection finishes the game.
    #[must_use]
    pub fn end_reason(self) -> Option<EndReason> {
        match self {
            Self::EndsInN => Some(EndReason::EndsInN),
            Self::RepeatedImmediate => Some(EndReason::RepeatedImmediate),
            Self::NotContinuation | Self::AlreadyUsed | Self::VerbOrAdjective | Self::GameOver => {
                None
            }
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A word ending in `ん` was played.
    EndsInN,
    /// The previous word was played again.
    RepeatedImmediate,
}

impl EndReason {
    /// Snake-case name used in views and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EndsInN => "ends_in_n",
            Self::RepeatedImmediate => "repeated_immediate",
        }
    }
}

/// Result of checking a candidate against the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The candidate extends the chain; carries the word as submitted.
    Accepted(String),
    /// The candidate was refused.
    Rejected(RejectionKind),
}

/// Checks `candidate` against `history`, whose last element is the word to
/// continue from.
///
/// The previous word's ending is normalized (small glides, long-vowel mark)
/// before the continuation check; the candidate's own ending is not.
pub fn validate(
    candidate: &str,
    history: &[String],
    classifier: &dyn PartOfSpeechClassifier,
) -> ValidationOutcome {
    let candidate_kana = to_hiragana(candidate);
    let previous_kana = history.last().map(|w| to_hiragana(w)).unwrap_or_default();

    if last_char(&candidate_kana) == Some(SYLLABIC_N) {
        return ValidationOutcome::Rejected(RejectionKind::EndsInN);
    }

    if classifier.is_verb_or_adjective(candidate) {
        return ValidationOutcome::Rejected(RejectionKind::VerbOrAdjective);
    }

    let required = effective_ending(&previous_kana);

    if candidate_kana == previous_kana {
        return ValidationOutcome::Rejected(RejectionKind::RepeatedImmediate);
    }

    if history.iter().any(|w| to_hiragana(w) == candidate_kana) {
        return ValidationOutcome::Rejected(RejectionKind::AlreadyUsed);
    }

    match (last_char(&required), first_char(&candidate_kana)) {
        (Some(needed), Some(given)) if needed == given => {
            ValidationOutcome::Accepted(candidate.to_owned())
        }
        _ => ValidationOutcome::Rejected(RejectionKind::NotContinuation),
    }
}
