//! Frozen clock for reproducing clock-seeded streams.

use chrono::{DateTime, TimeZone, Utc};
use lodestone_core::clock::Clock;

/// A clock stopped at one instant. Every generator seeded from it receives
/// the same tick count, so "unseeded" streams become reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock whose `ticks()` reads exactly `millis`.
    ///
    /// # Panics
    ///
    /// Panics if `millis` lies outside chrono's representable range.
    #[must_use]
    pub fn at_ticks(millis: i64) -> Self {
        Self(
            Utc.timestamp_millis_opt(millis)
                .single()
                .expect("tick count outside representable range"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
