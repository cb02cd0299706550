//! Shiritori Core — shared domain abstractions.
//!
//! Traits and types the game context and the HTTP adapter both depend on:
//! injectable time and randomness, command and event envelopes, and the
//! domain error type. Contains no transport code.

pub mod aggregate;
pub mod classifier;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod rng;
