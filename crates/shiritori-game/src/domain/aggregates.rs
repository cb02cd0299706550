//! Aggregate root for a single game of shiritori.

use shiritori_core::aggregate::AggregateRoot;
use shiritori_core::clock::Clock;
use shiritori_core::event::EventMetadata;
use uuid::Uuid;

use super::classifier::PartOfSpeechClassifier;
use super::events::{GameEnded, GameEvent, GameEventKind, GameStarted, WordAccepted};
use super::rules::{self, EndReason, RejectionKind, ValidationOutcome};

/// Game lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Words are being accepted.
    Active,
    /// A terminal rejection happened; only a reset continues play.
    Ended(EndReason),
}

impl GamePhase {
    /// Snake-case name of the phase.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Ended(_) => "ended",
        }
    }
}

/// The aggregate root for a game: its history of accepted words and phase.
///
/// The history is never empty; it starts with the seed word and only grows.
#[derive(Debug)]
pub struct Game {
    /// Aggregate identifier. A reset produces a new game with a new ID.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// Current phase.
    pub(crate) phase: GamePhase,
    /// Accepted words in play order, seed first.
    pub(crate) words: Vec<String>,
    /// Events recorded since the last drain.
    uncommitted_events: Vec<GameEvent>,
}

impl Game {
    /// Starts a game from `seed_word`, recording a `GameStarted` event.
    #[must_use]
    pub fn start(id: Uuid, seed_word: &str, correlation_id: Uuid, clock: &dyn Clock) -> Self {
        let mut game = Self {
            id,
            version: 0,
            phase: GamePhase::Active,
            words: Vec::new(),
            uncommitted_events: Vec::new(),
        };
        game.record(
            GameEventKind::GameStarted(GameStarted {
                seed_word: seed_word.to_owned(),
            }),
            correlation_id,
            clock,
        );
        game
    }

    /// The word the next submission has to continue from.
    #[must_use]
    pub fn current_word(&self) -> &str {
        self.words.last().map_or("", String::as_str)
    }

    /// All accepted words, seed first.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Plays `word` against the history.
    ///
    /// An accepted word is appended and recorded as `WordAccepted`. A
    /// terminal rejection records `GameEnded` and leaves the history as it
    /// was; other rejections record nothing. Once the game has ended every
    /// submission is rejected with `GameOver`.
    pub fn submit_word(
        &mut self,
        word: &str,
        classifier: &dyn PartOfSpeechClassifier,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> ValidationOutcome {
        if let GamePhase::Ended(_) = self.phase {
            return ValidationOutcome::Rejected(RejectionKind::GameOver);
        }

        let outcome = rules::validate(word, &self.words, classifier);
        match &outcome {
            ValidationOutcome::Accepted(accepted) => {
                let kind = GameEventKind::WordAccepted(WordAccepted {
                    word: accepted.clone(),
                });
                self.record(kind, correlation_id, clock);
            }
            ValidationOutcome::Rejected(rejection) => {
                if let Some(reason) = rejection.end_reason() {
                    let kind = GameEventKind::GameEnded(GameEnded {
                        reason,
                        word: word.to_owned(),
                    });
                    self.record(kind, correlation_id, clock);
                }
            }
        }
        outcome
    }

    fn record(&mut self, kind: GameEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = GameEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                aggregate_id: self.id,
                sequence_number: self.version + 1,
                correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }
}

impl AggregateRoot for Game {
    type Event = GameEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            GameEventKind::GameStarted(payload) => {
                self.phase = GamePhase::Active;
                self.words = vec![payload.seed_word.clone()];
            }
            GameEventKind::WordAccepted(payload) => {
                self.words.push(payload.word.clone());
            }
            GameEventKind::GameEnded(payload) => {
                self.phase = GamePhase::Ended(payload.reason);
            }
        }
        self.version += 1;
    }

    fn take_uncommitted_events(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.uncommitted_events)
    }
}
