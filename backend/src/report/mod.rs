//! Presentation reports
//!
//! Read-only views of a fleet snapshot shaped for the three presentation
//! collaborators:
//!
//! - **Table**: one [`BinRow`] per bin (id, fill %, status label, last update)
//! - **Renderer**: one [`Marker`] per bin, plus the route as a [`RouteOutcome`]
//! - **Stats**: [`FleetStats`]
//!
//! A drawn route also carries an [`ImpactEstimate`] against a fixed 20 km round.
//!
//! Reports carry no behavior; hosts format or serialize them as they like.

use crate::models::bin::Bin;
use crate::models::fleet::Fleet;
use crate::models::position::{Bounds, Position};
use crate::models::status::Status;
use crate::policy::FleetPolicy;
use crate::route::{Route, RouteError};
use crate::stats::FleetStats;
use jiff::Timestamp;
use serde::Serialize;

/// One line of the status table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinRow {
    pub id: String,
    pub fill_level: f64,
    pub status: Status,
    pub status_label: String,
    pub css_class: String,
    pub last_updated: Timestamp,
}

/// One map marker, with the popup details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: String,
    pub position: Position,
    pub fill_level: f64,
    pub status: Status,
    pub color: String,
    pub radius: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_overflow_hours: Option<u32>,
    pub last_updated: Timestamp,
}

/// Everything a dashboard refresh draws, except the route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetReport {
    pub policy: String,
    pub tick: usize,
    pub rows: Vec<BinRow>,
    pub markers: Vec<Marker>,
    pub stats: FleetStats,
}

impl FleetReport {
    pub fn build(fleet: &Fleet, policy: &FleetPolicy, tick: usize) -> Self {
        let rows = fleet.iter().map(|bin| row(bin, policy)).collect();
        let markers = fleet.iter().map(|bin| marker(bin, policy)).collect();

        Self {
            policy: policy.name.clone(),
            tick,
            rows,
            markers,
            stats: FleetStats::compute(fleet, &policy.thresholds),
        }
    }
}

fn row(bin: &Bin, policy: &FleetPolicy) -> BinRow {
    let status = policy.classify(bin.fill_level());
    let style = policy.style.for_status(status);

    BinRow {
        id: bin.id().to_string(),
        fill_level: bin.fill_level(),
        status,
        status_label: style.label.clone(),
        css_class: style.css_class.clone(),
        last_updated: bin.last_updated(),
    }
}

fn marker(bin: &Bin, policy: &FleetPolicy) -> Marker {
    let status = policy.classify(bin.fill_level());
    let extended = bin.extended();

    Marker {
        id: bin.id().to_string(),
        position: bin.position(),
        fill_level: bin.fill_level(),
        status,
        color: policy.style.for_status(status).color.clone(),
        radius: policy.style.marker_radius,
        priority: extended.map(|e| e.priority),
        predicted_overflow_hours: extended.map(|e| e.predicted_overflow_hours),
        last_updated: bin.last_updated(),
    }
}

/// Polyline the renderer should draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub stops: Vec<String>,
    pub waypoints: Vec<Position>,
    pub color: String,
    /// Polyline length, rounded to two decimals
    pub distance_km: f64,
    pub bounds: Bounds,
    pub impact: ImpactEstimate,
}

impl RouteReport {
    pub fn build(route: &Route, policy: &FleetPolicy) -> Self {
        Self {
            stops: route.stops().iter().map(|b| b.id().to_string()).collect(),
            waypoints: route.waypoints(),
            color: policy.style.route_color.clone(),
            distance_km: round2(route.distance_km()),
            bounds: route.bounds(),
            impact: ImpactEstimate::for_distance(route.distance_km()),
        }
    }
}

// ============================================================================
// Impact estimate
// ============================================================================

/// Length of the fixed collection round a route is compared against
pub const FIXED_ROUTE_KM: f64 = 20.0;

/// Truck mileage in kilometres per litre of fuel
pub const TRUCK_KM_PER_LITER: f64 = 5.0;

/// CO2 emitted per litre of fuel burnt
pub const CO2_KG_PER_LITER: f64 = 2.3;

/// Fuel and CO2 saved by driving the route instead of the fixed round
///
/// Savings go negative when the route is longer than the fixed round.
///
/// # Example
/// ```
/// use bin_fleet_core_rs::report::ImpactEstimate;
///
/// let impact = ImpactEstimate::for_distance(10.0);
/// assert_eq!(impact.fuel_saved_liters, 2.0);
/// assert_eq!(impact.co2_saved_kg, 4.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactEstimate {
    pub fixed_distance_km: f64,
    pub route_distance_km: f64,
    pub fuel_saved_liters: f64,
    pub co2_saved_kg: f64,
}

impl ImpactEstimate {
    pub fn for_distance(route_km: f64) -> Self {
        let fuel_saved =
            round2(FIXED_ROUTE_KM / TRUCK_KM_PER_LITER - route_km / TRUCK_KM_PER_LITER);
        Self {
            fixed_distance_km: FIXED_ROUTE_KM,
            route_distance_km: round2(route_km),
            fuel_saved_liters: fuel_saved,
            // from the already rounded fuel figure
            co2_saved_kg: round2(fuel_saved * CO2_KG_PER_LITER),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Result of a route request as the renderer sees it
///
/// A skipped route carries the message the user should be shown; nothing is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteOutcome {
    Drawn(RouteReport),
    Skipped { message: String },
}

impl RouteOutcome {
    pub fn from_result(result: &Result<Route, RouteError>, policy: &FleetPolicy) -> Self {
        match result {
            Ok(route) => RouteOutcome::Drawn(RouteReport::build(route, policy)),
            Err(err) => RouteOutcome::Skipped {
                message: err.to_string(),
            },
        }
    }
}
