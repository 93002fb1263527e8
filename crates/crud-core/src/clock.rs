//! Clock abstraction for deterministic timestamps.

use chrono::{DateTime, Utc};

/// Abstraction over system time so `created_at` can be pinned in tests.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current time as whole seconds since the Unix epoch.
    fn epoch_seconds(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
