//! Shared application state.

use std::sync::{Arc, Mutex};

use shiritori_core::classifier::PartOfSpeechClassifier;
use shiritori_core::clock::Clock;
use shiritori_core::error::DomainError;
use shiritori_core::rng::DeterministicRng;
use shiritori_game::application::command_handlers;
use shiritori_game::application::store::GameStore;
use uuid::Uuid;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of event timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Seed-word picker, locked only for the pick.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Verb/adjective predicate applied to every submission.
    pub classifier: Arc<dyn PartOfSpeechClassifier>,
    /// The one game this process referees.
    pub store: Arc<GameStore>,
}

impl AppState {
    /// Creates application state and starts the first game.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LockPoisoned` if the RNG mutex is poisoned.
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        classifier: Arc<dyn PartOfSpeechClassifier>,
    ) -> Result<Self, DomainError> {
        let game = command_handlers::start_game(Uuid::new_v4(), clock.as_ref(), &rng)?;
        tracing::info!(game_id = %game.id, seed_word = %game.current_word(), "first game started");
        Ok(Self {
            clock,
            rng,
            classifier,
            store: Arc::new(GameStore::new(game)),
        })
    }
}
