//! Time management for the simulation
//!
//! The simulation advances in discrete ticks driven by a wall-clock timer in
//! the host. This module counts ticks and remembers when the last one ran;
//! it never sleeps.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counts simulation ticks and tracks the refresh interval
///
/// # Example
/// ```
/// use bin_fleet_core_rs::TimeManager;
/// use std::time::Duration;
///
/// let mut time = TimeManager::new(Duration::from_secs(5));
/// assert_eq!(time.current_tick(), 0);
///
/// time.advance_tick(jiff::Timestamp::UNIX_EPOCH);
/// assert_eq!(time.current_tick(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeManager {
    /// Ticks elapsed since the fleet was created
    current_tick: usize,
    /// Wall-clock time between two ticks
    tick_interval: Duration,
    /// When the most recent tick ran
    last_tick_at: Option<Timestamp>,
}

impl TimeManager {
    /// Create a new TimeManager
    ///
    /// # Panics
    /// Panics if `tick_interval` is zero.
    pub fn new(tick_interval: Duration) -> Self {
        assert!(!tick_interval.is_zero(), "tick_interval must be positive");
        Self {
            current_tick: 0,
            tick_interval,
            last_tick_at: None,
        }
    }

    /// Advance time by one tick, recording when it happened
    pub fn advance_tick(&mut self, now: Timestamp) {
        self.current_tick += 1;
        self.last_tick_at = Some(now);
    }

    /// Get the current tick (total ticks since start)
    pub fn current_tick(&self) -> usize {
        self.current_tick
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn last_tick_at(&self) -> Option<Timestamp> {
        self.last_tick_at
    }
}
