//! Time source for the cache-buster query parameter.

use web_time::{SystemTime, UNIX_EPOCH};

/// Supplies the current time, in milliseconds since the Unix epoch.
///
/// The default [`SystemClock`] reads the wall clock; [`FixedClock`] always
/// answers the same instant, which makes cache-busted URLs predictable.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Milliseconds elapsed since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default()
    }
}

/// A clock stopped at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
