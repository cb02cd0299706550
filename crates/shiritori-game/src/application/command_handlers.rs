//! Command handlers for the game context.
//!
//! Each handler runs its domain call under the store lock, drains the events
//! it produced, and logs the result.

use std::sync::Mutex;

use shiritori_core::aggregate::AggregateRoot;
use shiritori_core::clock::Clock;
use shiritori_core::command::Command;
use shiritori_core::error::DomainError;
use shiritori_core::event::DomainEvent;
use shiritori_core::rng::DeterministicRng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::application::store::GameStore;
use crate::domain::aggregates::Game;
use crate::domain::classifier::PartOfSpeechClassifier;
use crate::domain::commands::{ResetGame, SubmitWord};
use crate::domain::events::GameEvent;
use crate::domain::rules::ValidationOutcome;
use crate::domain::word_bank;

/// Outcome of a submission together with the events it recorded.
#[derive(Debug)]
pub struct SubmissionResult {
    /// Whether the word was accepted.
    pub outcome: ValidationOutcome,
    /// Events recorded by the submission (empty for recoverable rejections).
    pub events: Vec<GameEvent>,
}

/// A freshly started game's seed word and its `GameStarted` event.
#[derive(Debug)]
pub struct ResetResult {
    /// Identifier of the new game.
    pub game_id: Uuid,
    /// The word the new game starts from.
    pub seed_word: String,
    /// Events recorded by the new game.
    pub events: Vec<GameEvent>,
}

/// Starts a game from a randomly chosen seed word.
///
/// The returned game has no uncommitted events; its `GameStarted` event is
/// logged and drained here so the first submission only sees its own events.
///
/// # Errors
///
/// Returns `DomainError::LockPoisoned` if the RNG mutex is poisoned.
pub fn start_game(
    correlation_id: Uuid,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<Game, DomainError> {
    let mut game = seeded_game(correlation_id, clock, rng)?;
    log_events(&game.take_uncommitted_events());
    Ok(game)
}

/// The `Mutex` is held only for the seed pick.
fn seeded_game(
    correlation_id: Uuid,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<Game, DomainError> {
    let seed_word = {
        let mut rng_guard = rng.lock().map_err(|_| DomainError::LockPoisoned("rng"))?;
        word_bank::pick_random(&mut *rng_guard)
    };
    Ok(Game::start(Uuid::new_v4(), seed_word, correlation_id, clock))
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        debug!(
            event_type = event.event_type(),
            sequence_number = event.metadata().sequence_number,
            "recorded event"
        );
    }
}

/// Handles the `SubmitWord` command: validates the word against the current
/// game and records the result.
///
/// Rejections are part of the returned outcome, not errors.
///
/// # Errors
///
/// Returns `DomainError::LockPoisoned` if the game lock is poisoned.
pub fn handle_submit_word(
    command: &SubmitWord,
    clock: &dyn Clock,
    classifier: &dyn PartOfSpeechClassifier,
    store: &GameStore,
) -> Result<SubmissionResult, DomainError> {
    let (outcome, events) = store.with_game(|game| {
        let outcome = game.submit_word(&command.word, classifier, command.correlation_id, clock);
        (outcome, game.take_uncommitted_events())
    })?;

    log_events(&events);

    match &outcome {
        ValidationOutcome::Accepted(word) => info!(
            correlation_id = %command.correlation_id,
            command_type = command.command_type(),
            word = %word,
            "word accepted"
        ),
        ValidationOutcome::Rejected(kind) => info!(
            correlation_id = %command.correlation_id,
            command_type = command.command_type(),
            word = %command.word,
            error_code = kind.code(),
            game_over = kind.end_reason().is_some(),
            "word rejected"
        ),
    }

    Ok(SubmissionResult { outcome, events })
}

/// Handles the `ResetGame` command: replaces the current game with a new one
/// seeded from the word bank. A poisoned game lock is recovered, so a reset
/// always brings play back.
///
/// # Errors
///
/// Returns `DomainError::LockPoisoned` if the RNG mutex is poisoned.
pub fn handle_reset_game(
    command: &ResetGame,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    store: &GameStore,
) -> Result<ResetResult, DomainError> {
    let mut game = seeded_game(command.correlation_id, clock, rng)?;
    let game_id = game.aggregate_id();
    let seed_word = game.current_word().to_owned();
    let events = game.take_uncommitted_events();
    log_events(&events);

    let previous = store.replace(game);
    debug!(
        previous_game_id = %previous.aggregate_id(),
        words_played = previous.words().len(),
        "discarded previous game"
    );
    info!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        game_id = %game_id,
        seed_word = %seed_word,
        "game reset"
    );

    Ok(ResetResult {
        game_id,
        seed_word,
        events,
    })
}
