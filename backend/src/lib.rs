//! Bin Fleet Simulator Core - Rust Engine
//!
//! Mock waste-bin monitoring: fabricates a fleet of bins, perturbs their fill
//! levels every tick, classifies them, and selects a naive collection route
//! through the fullest ones.
//!
//! # Architecture
//!
//! - **core**: Tick counting
//! - **models**: Domain types (Bin, Fleet, Position, Status)
//! - **policy**: Per-dashboard configuration (thresholds, noise, ids, styling)
//! - **route**: Route candidate selection and polyline geometry
//! - **stats**: Aggregate fleet statistics
//! - **report**: Presentation views for table, map and stats collaborators
//! - **simulator**: Fleet lifecycle (initialize, tick) and queries
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Fill levels are always within [0, 100]
//! 2. All randomness goes through one seedable RNG
//! 3. Fleets are values: nothing here renders or keeps ambient state

// Module declarations
pub mod core;
pub mod models;
pub mod policy;
pub mod report;
pub mod rng;
pub mod route;
pub mod simulator;
pub mod stats;

// Re-exports for convenience
pub use crate::core::time::TimeManager;
pub use models::{
    bin::{Bin, ExtendedAttributes},
    fleet::{Fleet, FleetError},
    position::{Bounds, Position},
    status::{Status, StatusThresholds},
};
pub use policy::{FleetPolicy, NoiseConfig};
pub use report::{BinRow, FleetReport, ImpactEstimate, Marker, RouteOutcome, RouteReport};
pub use rng::RngManager;
pub use route::{select_route_candidates, Route, RouteError};
pub use simulator::{SimulationError, Simulator, SimulatorConfig};
pub use stats::FleetStats;
