//! Command abstractions.

use uuid::Uuid;

/// Trait that all commands implement.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable command name used in log fields.
    fn command_type(&self) -> &'static str;

    /// Correlation ID linking the command to the events it produced.
    fn correlation_id(&self) -> Uuid;
}
