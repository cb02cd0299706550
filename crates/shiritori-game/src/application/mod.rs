//! Application layer: command and query handlers over the shared game store.

pub mod command_handlers;
pub mod query_handlers;
pub mod store;
