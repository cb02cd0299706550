//! Shiritori referee — game context.
//!
//! Decides whether a submitted word continues the chain, and owns the single
//! authoritative history of accepted words.

pub mod application;
pub mod domain;
