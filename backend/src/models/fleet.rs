//! Fleet
//!
//! The fixed-size, ordered collection of every bin under simulation.
//!
//! # Critical Invariants
//!
//! 1. **Non-empty**: a fleet always holds at least one bin
//! 2. **Unique ids**: no two bins share an id
//! 3. **Stable order**: iteration order is creation order; ticks never reorder

use crate::models::bin::Bin;
use crate::models::status::{Status, StatusThresholds};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur when assembling a fleet by hand
#[derive(Debug, Error, PartialEq)]
pub enum FleetError {
    #[error("Fleet must contain at least one bin")]
    Empty,

    #[error("Duplicate bin id: {0}")]
    DuplicateId(String),
}

/// Ordered snapshot of all bins
///
/// Fleets are values: a tick produces a new fleet rather than editing this one.
///
/// # Example
/// ```
/// use bin_fleet_core_rs::{Bin, Fleet, Position};
/// use jiff::Timestamp;
///
/// let now = Timestamp::UNIX_EPOCH;
/// let fleet = Fleet::from_bins(vec![
///     Bin::new("BIN-001", Position::new(0.0, 0.0), 10.0, now),
///     Bin::new("BIN-002", Position::new(0.0, 0.0), 90.0, now),
/// ]).unwrap();
///
/// assert_eq!(fleet.count(), 2);
/// assert_eq!(fleet.average_fill(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fleet {
    bins: Vec<Bin>,
}

impl Fleet {
    /// Build a fleet, checking it is non-empty and ids are unique
    pub fn from_bins(bins: Vec<Bin>) -> Result<Self, FleetError> {
        if bins.is_empty() {
            return Err(FleetError::Empty);
        }

        let mut seen = HashSet::with_capacity(bins.len());
        for bin in &bins {
            if !seen.insert(bin.id()) {
                return Err(FleetError::DuplicateId(bin.id().to_string()));
            }
        }

        Ok(Self { bins })
    }

    /// Internal constructor for bins already known to be valid
    pub(crate) fn from_bins_unchecked(bins: Vec<Bin>) -> Self {
        debug_assert!(!bins.is_empty());
        Self { bins }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bin> {
        self.bins.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Bin> {
        self.bins.iter().find(|b| b.id() == id)
    }

    /// Number of bins
    pub fn count(&self) -> usize {
        self.bins.len()
    }

    /// Number of bins whose fill level falls in `status`
    pub fn count_by_status(&self, status: Status, thresholds: &StatusThresholds) -> usize {
        self.bins
            .iter()
            .filter(|b| thresholds.classify(b.fill_level()) == status)
            .count()
    }

    /// Mean fill level rounded to the nearest integer (halves round up)
    pub fn average_fill(&self) -> u32 {
        let total: f64 = self.bins.iter().map(Bin::fill_level).sum();
        let mean = total / self.bins.len() as f64;
        // mean is within [0, 100] so the cast cannot truncate
        (mean + 0.5).floor() as u32
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Bin;
    type IntoIter = std::slice::Iter<'a, Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}
