//! Commands for the game context.

use shiritori_core::command::Command;
use uuid::Uuid;

/// Command to play the next word in the chain.
#[derive(Debug, Clone)]
pub struct SubmitWord {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The word as the player typed it.
    pub word: String,
}

impl Command for SubmitWord {
    fn command_type(&self) -> &'static str {
        "game.submit_word"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to throw the current game away and start from a new seed word.
#[derive(Debug, Clone)]
pub struct ResetGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ResetGame {
    fn command_type(&self) -> &'static str {
        "game.reset"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
