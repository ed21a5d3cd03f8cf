//! Aggregate fleet statistics
//!
//! Pure reductions over a fleet snapshot, recomputed on every call and never
//! cached. These feed the stats panel of both dashboards.

use crate::models::fleet::Fleet;
use crate::models::status::{Status, StatusThresholds};
use serde::Serialize;

/// Counts per status band plus the rounded mean fill level
///
/// # Example
/// ```
/// use bin_fleet_core_rs::{Bin, Fleet, FleetStats, Position, StatusThresholds};
/// use jiff::Timestamp;
///
/// let now = Timestamp::UNIX_EPOCH;
/// let fleet = Fleet::from_bins(vec![
///     Bin::new("A", Position::new(0.0, 0.0), 10.0, now),
///     Bin::new("B", Position::new(0.0, 0.0), 60.0, now),
///     Bin::new("C", Position::new(0.0, 0.0), 90.0, now),
/// ]).unwrap();
///
/// let stats = FleetStats::compute(&fleet, &StatusThresholds::new(50.0, 85.0));
/// assert_eq!((stats.low, stats.medium, stats.full), (1, 1, 1));
/// assert_eq!(stats.average_fill, 53);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetStats {
    pub total: usize,
    pub low: usize,
    pub medium: usize,
    /// Bins in the top band (Full or Critical)
    pub full: usize,
    /// Mean fill level, rounded to the nearest integer
    pub average_fill: u32,
}

impl FleetStats {
    pub fn compute(fleet: &Fleet, thresholds: &StatusThresholds) -> Self {
        let mut counts = [0usize; 3];
        for bin in fleet {
            let slot = match thresholds.classify(bin.fill_level()) {
                Status::Low => 0,
                Status::Medium => 1,
                Status::Full => 2,
            };
            counts[slot] += 1;
        }

        Self {
            total: fleet.count(),
            low: counts[0],
            medium: counts[1],
            full: counts[2],
            average_fill: fleet.average_fill(),
        }
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Low => self.low,
            Status::Medium => self.medium,
            Status::Full => self.full,
        }
    }
}
