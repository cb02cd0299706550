//! Domain layer: kana handling, chain rules, and the game aggregate.

pub mod aggregates;
pub mod classifier;
pub mod commands;
pub mod events;
pub mod kana;
pub mod rules;
pub mod word_bank;
