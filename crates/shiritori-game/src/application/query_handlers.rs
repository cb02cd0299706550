//! Query handlers for the game context.
//!
//! Read-only views over the current game, taken under the store lock so a
//! view never mixes two games.

use serde::Serialize;
use shiritori_core::aggregate::AggregateRoot;
use shiritori_core::error::DomainError;
use uuid::Uuid;

use crate::application::store::GameStore;
use crate::domain::aggregates::GamePhase;

/// Read-only view of the current game.
#[derive(Debug, Serialize)]
pub struct HistoryView {
    /// The game identifier; changes on every reset.
    pub game_id: Uuid,
    /// Accepted words, seed first.
    pub words: Vec<String>,
    /// `"active"` or `"ended"`.
    pub phase: String,
    /// Why the game ended, if it has.
    pub end_reason: Option<String>,
    /// Current version (event count).
    pub version: i64,
}

/// Returns the word the next submission has to continue from.
///
/// # Errors
///
/// Returns `DomainError::LockPoisoned` if the game lock is poisoned.
pub fn get_current_word(store: &GameStore) -> Result<String, DomainError> {
    store.current_word()
}

/// Returns the full history and phase of the current game.
///
/// # Errors
///
/// Returns `DomainError::LockPoisoned` if the game lock is poisoned.
pub fn get_history(store: &GameStore) -> Result<HistoryView, DomainError> {
    store.with_game(|game| {
        let end_reason = match game.phase() {
            GamePhase::Active => None,
            GamePhase::Ended(reason) => Some(reason.as_str().to_owned()),
        };
        HistoryView {
            game_id: game.aggregate_id(),
            words: game.words().to_vec(),
            phase: game.phase().name().to_owned(),
            end_reason,
            version: game.version(),
        }
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use shiritori_test_support::FixedClock;
    use uuid::Uuid;

    use super::*;
    use crate::domain::aggregates::Game;
    use crate::domain::classifier::AcceptAllClassifier;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn store_after(seed: &str, words: &[&str]) -> GameStore {
        let clock = fixed_clock();
        let mut game = Game::start(Uuid::new_v4(), seed, Uuid::new_v4(), &clock);
        for word in words {
            game.submit_word(word, &AcceptAllClassifier, Uuid::new_v4(), &clock);
        }
        GameStore::new(game)
    }

    #[test]
    fn test_get_current_word_returns_last_accepted() {
        let store = store_after("しりとり", &["りんご", "ごま"]);
        assert_eq!(get_current_word(&store).unwrap(), "ごま");
    }

    #[test]
    fn test_get_history_for_active_game() {
        let store = store_after("しりとり", &["りんご", "ねこ", "ごま"]);

        let view = get_history(&store).unwrap();

        assert_eq!(view.words, ["しりとり", "りんご", "ごま"]);
        assert_eq!(view.phase, "active");
        assert_eq!(view.end_reason, None);
        assert_eq!(view.version, 3);
    }

    #[test]
    fn test_get_history_for_ended_game() {
        let store = store_after("しりとり", &["りんご", "ごはん"]);

        let view = get_history(&store).unwrap();

        assert_eq!(view.words, ["しりとり", "りんご"]);
        assert_eq!(view.phase, "ended");
        assert_eq!(view.end_reason.as_deref(), Some("ends_in_n"));
    }
}
