//! Test clock — deterministic `Clock` implementation for tests.

use chrono::{DateTime, Utc};
use shiritori_core::clock::Clock;

/// A clock frozen at one instant, so event timestamps can be asserted.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
