//! Domain error types.
//!
//! Player mistakes (a word that breaks the chain) are not errors: they are
//! reported as rejection outcomes by the game context. `DomainError` covers
//! faults of the process itself.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A mutex guarding shared state was poisoned by a panicking holder.
    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),

    /// An infrastructure error (file access, startup resources).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
