//! Fleet Policy Module
//!
//! A [`FleetPolicy`] is the named record of everything that differs between
//! dashboards: status thresholds, tick noise, id format, route selection
//! rules, optional per-bin attributes and display styling. The simulator is a
//! single component instantiated with one policy; nothing in it is hard-coded
//! to a particular dashboard.
//!
//! # Built-in policies
//!
//! | | `standard` | `monitoring` |
//! |---|---|---|
//! | thresholds | 50 / 85 | 50 / 75 |
//! | top label | Full | Critical |
//! | noise | uniform [-5, 5) | uniform [-1.5, 2.5), 1 decimal |
//! | route cap | none | 15 |
//! | ids | `BIN-001` | `RX-0001` |
//!
//! # Example
//!
//! ```rust
//! use bin_fleet_core_rs::policy::FleetPolicy;
//! use bin_fleet_core_rs::Status;
//!
//! let policy = FleetPolicy::monitoring();
//! assert_eq!(policy.classify(80.0), Status::Full);
//! assert_eq!(policy.style.label(Status::Full), "Critical");
//! assert_eq!(policy.id_format.format(7), "RX-0007");
//! ```

use crate::models::status::{Status, StatusThresholds};
use serde::{Deserialize, Serialize};

pub mod noise;

pub use noise::{FillNoise, NoiseConfig, RoundedUniformNoise, UniformNoise};

/// Minimum number of stops for a route to be drawable
pub const MIN_ROUTE_STOPS: usize = 2;

/// How bin ids are generated: prefix plus zero-padded 1-based index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdFormat {
    pub prefix: String,
    pub width: usize,
}

impl IdFormat {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
        }
    }

    /// Id of the `index`-th bin (1-based); indices wider than `width` are not truncated
    pub fn format(&self, index: usize) -> String {
        format!("{}{:0width$}", self.prefix, index, width = self.width)
    }

    /// Whether `id` could have been produced by [`IdFormat::format`]
    pub fn matches(&self, id: &str) -> bool {
        id.strip_prefix(self.prefix.as_str())
            .map(|digits| digits.len() >= self.width && digits.bytes().all(|b| b.is_ascii_digit()))
            .unwrap_or(false)
    }
}

/// Which bins qualify for the collection route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePolicy {
    /// Bins at or above this status qualify
    pub threshold: Status,
    /// Keep at most this many qualifying bins, in fleet order
    #[serde(default)]
    pub max_stops: Option<usize>,
}

/// Display attributes of one status band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusStyle {
    pub label: String,
    pub color: String,
    pub css_class: String,
}

impl StatusStyle {
    pub fn new(label: &str, color: &str, css_class: &str) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            css_class: css_class.to_string(),
        }
    }
}

/// Presentation data consumed by the renderer and table collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStyle {
    pub low: StatusStyle,
    pub medium: StatusStyle,
    pub full: StatusStyle,
    pub marker_radius: u32,
    pub route_color: String,
}

impl DashboardStyle {
    pub fn for_status(&self, status: Status) -> &StatusStyle {
        match status {
            Status::Low => &self.low,
            Status::Medium => &self.medium,
            Status::Full => &self.full,
        }
    }

    pub fn label(&self, status: Status) -> &str {
        &self.for_status(status).label
    }
}

/// Complete per-dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetPolicy {
    /// Human-readable policy name
    pub name: String,
    pub thresholds: StatusThresholds,
    pub noise: NoiseConfig,
    pub id_format: IdFormat,
    pub route: RoutePolicy,
    /// Generate priority and overflow prediction for each bin
    #[serde(default)]
    pub extended_attributes: bool,
    pub style: DashboardStyle,
}

impl FleetPolicy {
    /// Bin dashboard defaults: Full from 85%, zero-mean ±5 noise
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            thresholds: StatusThresholds::new(50.0, 85.0),
            noise: NoiseConfig::Uniform { min: -5.0, max: 5.0 },
            id_format: IdFormat::new("BIN-", 3),
            route: RoutePolicy {
                threshold: Status::Full,
                max_stops: None,
            },
            extended_attributes: false,
            style: DashboardStyle {
                low: StatusStyle::new("Low", "green", "status-low"),
                medium: StatusStyle::new("Medium", "orange", "status-medium"),
                full: StatusStyle::new("Full", "red", "status-full"),
                marker_radius: 10,
                route_color: "blue".to_string(),
            },
        }
    }

    /// The monitoring dashboard: Critical from 75%, upward-drifting noise
    pub fn monitoring() -> Self {
        Self {
            name: "monitoring".to_string(),
            thresholds: StatusThresholds::new(50.0, 75.0),
            noise: NoiseConfig::UniformRounded {
                min: -1.5,
                max: 2.5,
                decimals: 1,
            },
            id_format: IdFormat::new("RX-", 4),
            route: RoutePolicy {
                threshold: Status::Full,
                max_stops: Some(15),
            },
            extended_attributes: true,
            style: DashboardStyle {
                low: StatusStyle::new("Low", "#22c55e", "status-low"),
                medium: StatusStyle::new("Medium", "#f59e0b", "status-medium"),
                full: StatusStyle::new("Critical", "#ef4444", "status-full"),
                marker_radius: 12,
                route_color: "#22c55e".to_string(),
            },
        }
    }

    /// Look up a built-in policy by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::standard()),
            "monitoring" => Some(Self::monitoring()),
            _ => None,
        }
    }

    pub fn classify(&self, fill_level: f64) -> Status {
        self.thresholds.classify(fill_level)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.thresholds.validate()?;
        self.noise.validate()?;

        if let Some(max_stops) = self.route.max_stops {
            if max_stops < MIN_ROUTE_STOPS {
                return Err(format!(
                    "route.max_stops must be at least {}, got {}",
                    MIN_ROUTE_STOPS, max_stops
                ));
            }
        }

        Ok(())
    }
}
