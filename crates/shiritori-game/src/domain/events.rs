//! Domain events for the game context.

use serde::{Deserialize, Serialize};
use shiritori_core::event::{DomainEvent, EventMetadata};

use super::rules::EndReason;

/// Emitted when a game starts from a seed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStarted {
    /// The first word of the chain.
    pub seed_word: String,
}

/// Emitted when a submitted word extends the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAccepted {
    /// The word as submitted.
    pub word: String,
}

/// Emitted when a submitted word finishes the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnded {
    /// Why the game ended.
    pub reason: EndReason,
    /// The word that ended it. Not part of the history.
    pub word: String,
}

/// Event payload variants for the game context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventKind {
    /// A new game started.
    GameStarted(GameStarted),
    /// A word was appended to the history.
    WordAccepted(WordAccepted),
    /// The game ended.
    GameEnded(GameEnded),
}

/// Domain event envelope for the game context.
#[derive(Debug, Clone)]
pub struct GameEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: GameEventKind,
}

impl DomainEvent for GameEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            GameEventKind::GameStarted(_) => "game.started",
            GameEventKind::WordAccepted(_) => "game.word_accepted",
            GameEventKind::GameEnded(_) => "game.ended",
        }
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
