//! Shared test doubles for the shiritori referee.

mod classifier;
mod clock;
mod rng;

pub use classifier::DenyListClassifier;
pub use clock::FixedClock;
pub use rng::{MockRng, SequenceRng};
