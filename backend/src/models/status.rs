//! Fill-level status classification
//!
//! Status is derived from a bin's fill level on demand and never stored.
//! The band boundaries are policy data: the standard dashboard calls the top
//! band "Full" from 85%, the monitoring dashboard calls it "Critical" from 75%.
//! Both are the same [`Status::Full`] band with different thresholds and labels.
//!
//! # Critical Invariants
//!
//! 1. **Partition**: every fill level in [0, 100] maps to exactly one band
//! 2. **Lower-bound inclusive**: a fill equal to a threshold belongs to the upper band

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way classification of a fill level, ordered from emptiest to fullest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Low,
    Medium,
    /// Top band, labelled "Full" or "Critical" depending on the policy
    Full,
}

impl Status {
    /// All bands in ascending order
    pub const ALL: [Status; 3] = [Status::Low, Status::Medium, Status::Full];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Low => write!(f, "low"),
            Status::Medium => write!(f, "medium"),
            Status::Full => write!(f, "full"),
        }
    }
}

/// Lower bounds of the Medium and Full bands, in percent
///
/// # Example
/// ```
/// use bin_fleet_core_rs::{Status, StatusThresholds};
///
/// let thresholds = StatusThresholds::new(50.0, 85.0);
/// assert_eq!(thresholds.classify(49.9), Status::Low);
/// assert_eq!(thresholds.classify(50.0), Status::Medium);
/// assert_eq!(thresholds.classify(85.0), Status::Full);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// Fill levels at or above this are at least Medium
    pub medium_from: f64,
    /// Fill levels at or above this are Full
    pub full_from: f64,
}

impl StatusThresholds {
    pub fn new(medium_from: f64, full_from: f64) -> Self {
        Self {
            medium_from,
            full_from,
        }
    }

    /// Classify a fill level
    pub fn classify(&self, fill_level: f64) -> Status {
        if fill_level < self.medium_from {
            Status::Low
        } else if fill_level < self.full_from {
            Status::Medium
        } else {
            Status::Full
        }
    }

    /// Check `0 < medium_from < full_from <= 100`
    pub fn validate(&self) -> Result<(), String> {
        let ordered = 0.0 < self.medium_from
            && self.medium_from < self.full_from
            && self.full_from <= 100.0;

        if ordered {
            Ok(())
        } else {
            Err(format!(
                "thresholds must satisfy 0 < medium_from < full_from <= 100, got medium_from={} full_from={}",
                self.medium_from, self.full_from
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering() {
        assert!(Status::Low < Status::Medium);
        assert!(Status::Medium < Status::Full);
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        assert!(StatusThresholds::new(85.0, 50.0).validate().is_err());
        assert!(StatusThresholds::new(50.0, 50.0).validate().is_err());
        assert!(StatusThresholds::new(0.0, 50.0).validate().is_err());
        assert!(StatusThresholds::new(50.0, 101.0).validate().is_err());
        assert!(StatusThresholds::new(f64::NAN, 85.0).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_both_dashboards() {
        assert!(StatusThresholds::new(50.0, 85.0).validate().is_ok());
        assert!(StatusThresholds::new(50.0, 75.0).validate().is_ok());
    }
}
