//! Bin model
//!
//! Represents a single tracked waste container.
//! Each bin has:
//! - Stable identifier (e.g. "BIN-007")
//! - Fixed position (bins never move)
//! - Fill level in percent, replaced on every tick
//! - Timestamp of the last fill update
//! - Optional static attributes shown by the monitoring dashboard
//!
//! CRITICAL: fill_level is always within [0, 100]

use crate::models::position::Position;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Lowest possible fill level
pub const MIN_FILL: f64 = 0.0;

/// Highest possible fill level
pub const MAX_FILL: f64 = 100.0;

/// Clamp a fill level into [0, 100]; NaN is treated as empty
pub fn clamp_fill(fill_level: f64) -> f64 {
    if fill_level.is_nan() {
        MIN_FILL
    } else {
        fill_level.clamp(MIN_FILL, MAX_FILL)
    }
}

/// Static attributes only the monitoring dashboard tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedAttributes {
    /// Collection priority, 1 (lowest) to 10
    pub priority: u8,
    /// Predicted hours until the bin overflows
    pub predicted_overflow_hours: u32,
}

/// A tracked waste container
///
/// # Example
/// ```
/// use bin_fleet_core_rs::{Bin, Position};
/// use jiff::Timestamp;
///
/// let bin = Bin::new("BIN-001", Position::new(18.52, 73.85), 140.0, Timestamp::UNIX_EPOCH);
/// assert_eq!(bin.fill_level(), 100.0); // clamped
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBin")]
pub struct Bin {
    id: String,
    position: Position,
    fill_level: f64,
    last_updated: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extended: Option<ExtendedAttributes>,
}

/// Wire form of a [`Bin`]; deserialized fill levels pass through [`clamp_fill`]
#[derive(Deserialize)]
struct RawBin {
    id: String,
    position: Position,
    fill_level: f64,
    last_updated: Timestamp,
    #[serde(default)]
    extended: Option<ExtendedAttributes>,
}

impl From<RawBin> for Bin {
    fn from(raw: RawBin) -> Self {
        let bin = Bin::new(raw.id, raw.position, raw.fill_level, raw.last_updated);
        match raw.extended {
            Some(extended) => bin.with_extended(extended),
            None => bin,
        }
    }
}

impl Bin {
    /// Create a new bin, clamping the fill level
    pub fn new(
        id: impl Into<String>,
        position: Position,
        fill_level: f64,
        last_updated: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            fill_level: clamp_fill(fill_level),
            last_updated,
            extended: None,
        }
    }

    /// Attach monitoring attributes (builder pattern)
    pub fn with_extended(mut self, extended: ExtendedAttributes) -> Self {
        self.extended = Some(extended);
        self
    }

    /// Copy of this bin with a new fill level and update time
    ///
    /// Everything else (id, position, attributes) is carried over unchanged.
    pub fn with_fill(&self, fill_level: f64, now: Timestamp) -> Self {
        Self {
            fill_level: clamp_fill(fill_level),
            last_updated: now,
            ..self.clone()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn fill_level(&self) -> f64 {
        self.fill_level
    }

    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    pub fn extended(&self) -> Option<ExtendedAttributes> {
        self.extended
    }
}
