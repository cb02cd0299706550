//! Process-wide game store.
//!
//! Exactly one game exists at a time. Every operation takes the lock once for
//! its whole read-validate-write sequence, so a submission can never observe
//! a half-applied reset and two submissions can never both extend the same
//! last word.

use std::sync::{Mutex, MutexGuard};

use shiritori_core::error::DomainError;
use tracing::warn;

use crate::domain::aggregates::Game;

/// Owner of the single authoritative game.
#[derive(Debug)]
pub struct GameStore {
    game: Mutex<Game>,
}

impl GameStore {
    /// Creates a store holding `game`.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game: Mutex::new(game),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Game>, DomainError> {
        self.game
            .lock()
            .map_err(|_| DomainError::LockPoisoned("game"))
    }

    /// Runs `f` with exclusive access to the game.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LockPoisoned` if a previous holder panicked.
    pub fn with_game<R>(&self, f: impl FnOnce(&mut Game) -> R) -> Result<R, DomainError> {
        let mut guard = self.lock()?;
        Ok(f(&mut *guard))
    }

    /// Replaces the whole game, returning the one it displaced.
    ///
    /// A poisoned lock is recovered here: the displaced game is discarded as
    /// a whole, so whatever state a panicking holder left behind is never
    /// read again.
    pub fn replace(&self, game: Game) -> Game {
        let mut guard = self.game.lock().unwrap_or_else(|poisoned| {
            warn!("game lock poisoned; replacing the game");
            self.game.clear_poison();
            poisoned.into_inner()
        });
        std::mem::replace(&mut *guard, game)
    }

    /// The word the next submission has to continue from.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LockPoisoned` if a previous holder panicked.
    pub fn current_word(&self) -> Result<String, DomainError> {
        self.with_game(|game| game.current_word().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::domain::classifier::AcceptAllClassifier;
    use crate::domain::rules::ValidationOutcome;
    use chrono::{TimeZone, Utc};
    use shiritori_test_support::FixedClock;
    use uuid::Uuid;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn store_with(seed: &str) -> GameStore {
        GameStore::new(Game::start(Uuid::new_v4(), seed, Uuid::new_v4(), &fixed_clock()))
    }

    #[test]
    fn test_current_word_is_seed() {
        let store = store_with("すいか");
        assert_eq!(store.current_word().unwrap(), "すいか");
    }

    #[test]
    fn test_replace_swaps_whole_game() {
        let store = store_with("しりとり");
        store
            .with_game(|game| {
                game.submit_word("りんご", &AcceptAllClassifier, Uuid::new_v4(), &fixed_clock())
            })
            .unwrap();

        let fresh = Game::start(Uuid::new_v4(), "うま", Uuid::new_v4(), &fixed_clock());
        let fresh_id = fresh.id;
        let previous = store.replace(fresh);

        assert_eq!(previous.words(), ["しりとり", "りんご"]);
        assert_eq!(store.current_word().unwrap(), "うま");
        assert_eq!(store.with_game(|game| game.id).unwrap(), fresh_id);
    }

    #[test]
    fn test_concurrent_submissions_accept_a_word_once() {
        let store = Arc::new(store_with("しりとり"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .with_game(|game| {
                            game.submit_word(
                                "りんご",
                                &AcceptAllClassifier,
                                Uuid::new_v4(),
                                &fixed_clock(),
                            )
                        })
                        .unwrap()
                })
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|outcome| matches!(outcome, ValidationOutcome::Accepted(_)))
            .count();

        assert_eq!(accepted, 1);
        assert_eq!(
            store.with_game(|game| game.words().to_vec()).unwrap(),
            ["しりとり", "りんご"]
        );
    }

    #[test]
    fn test_poisoned_lock_surfaces_as_domain_error() {
        let store = Arc::new(store_with("しりとり"));
        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            poisoner
                .with_game(|game| assert!(game.words().is_empty(), "holder panicked"))
                .unwrap();
        })
        .join();

        match store.current_word() {
            Err(DomainError::LockPoisoned(name)) => assert_eq!(name, "game"),
            other => panic!("expected LockPoisoned, got {other:?}"),
        }
    }

    #[test]
    fn test_replace_recovers_poisoned_lock() {
        let store = Arc::new(store_with("しりとり"));
        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            poisoner
                .with_game(|game| assert!(game.words().is_empty(), "holder panicked"))
                .unwrap();
        })
        .join();
        assert!(store.current_word().is_err());

        let fresh = Game::start(Uuid::new_v4(), "うま", Uuid::new_v4(), &fixed_clock());
        let previous = store.replace(fresh);

        assert_eq!(previous.words(), ["しりとり"]);
        assert_eq!(store.current_word().unwrap(), "うま");
        let outcome = store
            .with_game(|game| {
                game.submit_word("まくら", &AcceptAllClassifier, Uuid::new_v4(), &fixed_clock())
            })
            .unwrap();
        assert_eq!(outcome, ValidationOutcome::Accepted("まくら".to_owned()));
    }
}
