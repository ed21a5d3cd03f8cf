//! Route Candidate Selection
//!
//! Picks the bins a collection truck should visit and exposes the polyline
//! through them. This is deliberately naive: candidates are the bins at or
//! above a status threshold, kept in fleet order and optionally truncated.
//! There is no reordering by distance and no optimization.
//!
//! # Critical Invariants
//!
//! 1. **Order preservation**: stops appear in fleet order
//! 2. **No single-stop routes**: fewer than two candidates is an error
//! 3. **Read-only**: selection never mutates the fleet
//!
//! # Example
//!
//! ```rust
//! use bin_fleet_core_rs::{Bin, Fleet, Position, Status, StatusThresholds};
//! use bin_fleet_core_rs::route::{select_route_candidates, RouteError};
//! use jiff::Timestamp;
//!
//! let now = Timestamp::UNIX_EPOCH;
//! let fleet = Fleet::from_bins(vec![
//!     Bin::new("BIN-001", Position::new(18.52, 73.85), 90.0, now),
//!     Bin::new("BIN-002", Position::new(18.53, 73.86), 20.0, now),
//!     Bin::new("BIN-003", Position::new(18.51, 73.84), 95.0, now),
//! ]).unwrap();
//! let thresholds = StatusThresholds::new(50.0, 85.0);
//!
//! let route = select_route_candidates(&fleet, &thresholds, Status::Full, None).unwrap();
//! let ids: Vec<&str> = route.stops().iter().map(|b| b.id()).collect();
//! assert_eq!(ids, vec!["BIN-001", "BIN-003"]);
//!
//! let err = select_route_candidates(&fleet, &thresholds, Status::Full, Some(1)).unwrap_err();
//! assert_eq!(err, RouteError::InsufficientCandidates { found: 1, required: 2 });
//! ```

use crate::models::bin::Bin;
use crate::models::fleet::Fleet;
use crate::models::position::{Bounds, Position};
use crate::models::status::{Status, StatusThresholds};
use crate::policy::MIN_ROUTE_STOPS;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during route selection
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Not enough bins to generate a route: found {found}, need at least {required}")]
    InsufficientCandidates { found: usize, required: usize },
}

/// Ordered stops of a collection route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    stops: Vec<Bin>,
    bounds: Bounds,
}

impl Route {
    pub fn stops(&self) -> &[Bin] {
        &self.stops
    }

    /// Number of stops (always at least two)
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Polyline vertices in visiting order
    pub fn waypoints(&self) -> Vec<Position> {
        self.stops.iter().map(Bin::position).collect()
    }

    /// Length of the polyline in kilometres (sum of great-circle legs)
    pub fn distance_km(&self) -> f64 {
        self.stops
            .windows(2)
            .map(|leg| leg[0].position().distance_km(&leg[1].position()))
            .sum()
    }

    /// Box a map view should fit to show the whole route
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Select route stops from `fleet`
///
/// Keeps bins whose status is at or above `threshold`, in fleet order, then
/// truncates to `max_stops` when given. Fails when fewer than two stops remain.
pub fn select_route_candidates(
    fleet: &Fleet,
    thresholds: &StatusThresholds,
    threshold: Status,
    max_stops: Option<usize>,
) -> Result<Route, RouteError> {
    let limit = max_stops.unwrap_or(usize::MAX);

    let stops: Vec<Bin> = fleet
        .iter()
        .filter(|bin| thresholds.classify(bin.fill_level()) >= threshold)
        .take(limit)
        .cloned()
        .collect();

    let insufficient = RouteError::InsufficientCandidates {
        found: stops.len(),
        required: MIN_ROUTE_STOPS,
    };
    if stops.len() < MIN_ROUTE_STOPS {
        return Err(insufficient);
    }

    let positions: Vec<Position> = stops.iter().map(Bin::position).collect();
    let bounds = Bounds::enclosing(&positions).ok_or(insufficient)?;

    Ok(Route { stops, bounds })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn fleet(points: &[(f64, f64, f64)]) -> Fleet {
        let bins = points
            .iter()
            .enumerate()
            .map(|(i, &(lat, lng, fill))| {
                Bin::new(format!("B{}", i), Position::new(lat, lng), fill, Timestamp::UNIX_EPOCH)
            })
            .collect();
        Fleet::from_bins(bins).unwrap()
    }

    #[test]
    fn test_distance_sums_legs() {
        let f = fleet(&[(0.0, 0.0, 90.0), (0.0, 1.0, 90.0), (0.0, 2.0, 90.0)]);
        let thresholds = StatusThresholds::new(50.0, 85.0);
        let route = select_route_candidates(&f, &thresholds, Status::Full, None).unwrap();

        let one_degree = Position::new(0.0, 0.0).distance_km(&Position::new(0.0, 1.0));
        assert!((route.distance_km() - 2.0 * one_degree).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_cover_waypoints() {
        let f = fleet(&[(1.0, 4.0, 99.0), (-1.0, 2.0, 10.0), (3.0, -2.0, 88.0)]);
        let thresholds = StatusThresholds::new(50.0, 85.0);
        let route = select_route_candidates(&f, &thresholds, Status::Full, None).unwrap();

        assert_eq!(
            route.bounds(),
            Bounds {
                south: 1.0,
                west: -2.0,
                north: 3.0,
                east: 4.0
            }
        );
    }

    #[test]
    fn test_medium_threshold_includes_full_bins() {
        let f = fleet(&[(0.0, 0.0, 60.0), (0.0, 0.0, 95.0), (0.0, 0.0, 10.0)]);
        let thresholds = StatusThresholds::new(50.0, 85.0);
        let route = select_route_candidates(&f, &thresholds, Status::Medium, None).unwrap();
        assert_eq!(route.len(), 2);
    }
}
