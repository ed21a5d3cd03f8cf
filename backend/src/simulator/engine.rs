//! Simulator Engine
//!
//! The single logical component of the dashboard: creates a fleet, advances
//! it one tick at a time, and answers classification, route and stats
//! queries against any fleet snapshot.
//!
//! # Architecture
//!
//! The fleet is a value, not simulator state. The host owns it:
//!
//! ```text
//! fleet = simulator.initialize()
//! loop every tick_interval:
//!     fleet = simulator.tick(&fleet)
//!     render(simulator.report(&fleet))
//! on user request:
//!     render(simulator.select_route(&fleet))   // read-only
//! ```
//!
//! # Example
//!
//! ```rust
//! use bin_fleet_core_rs::{Simulator, SimulatorConfig};
//!
//! let mut config = SimulatorConfig::standard();
//! config.rng_seed = Some(12345);
//!
//! let mut simulator = Simulator::new(config).unwrap();
//! let fleet = simulator.initialize();
//! assert_eq!(fleet.count(), 20);
//!
//! let fleet = simulator.tick(&fleet);
//! assert_eq!(simulator.current_tick(), 1);
//! assert!(fleet.iter().all(|b| (0.0..=100.0).contains(&b.fill_level())));
//! ```

use crate::core::time::TimeManager;
use crate::models::bin::{Bin, ExtendedAttributes};
use crate::models::fleet::Fleet;
use crate::models::position::Position;
use crate::models::status::Status;
use crate::policy::{FillNoise, FleetPolicy};
use crate::report::{FleetReport, RouteOutcome};
use crate::rng::RngManager;
use crate::route::{select_route_candidates, Route, RouteError};
use crate::stats::FleetStats;
use jiff::Timestamp;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete simulator configuration
///
/// # Fields
///
/// * `policy` - Thresholds, noise, ids, route rules and styling
/// * `bin_count` - Fleet size, fixed for the whole run
/// * `center` - Point the bins are scattered around
/// * `spread_degrees` - Width of the square (in degrees) bins are placed in
/// * `tick_interval_ms` - Wall-clock time between ticks in the host
/// * `rng_seed` - Seed for a reproducible run; `None` seeds from OS entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub policy: FleetPolicy,
    pub bin_count: usize,
    pub center: Position,
    pub spread_degrees: f64,
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl SimulatorConfig {
    /// Twenty bins around central Pune, refreshed every 5 seconds
    pub fn standard() -> Self {
        Self {
            policy: FleetPolicy::standard(),
            bin_count: 20,
            center: Position::new(18.5204, 73.8567),
            spread_degrees: 0.02,
            tick_interval_ms: 5_000,
            rng_seed: None,
        }
    }

    /// Twenty bins around Amravati, refreshed every 8 seconds
    pub fn monitoring() -> Self {
        Self {
            policy: FleetPolicy::monitoring(),
            bin_count: 20,
            center: Position::new(20.9320, 77.7523),
            spread_degrees: 0.08,
            tick_interval_ms: 8_000,
            rng_seed: None,
        }
    }

    /// Look up a built-in configuration by policy name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::standard()),
            "monitoring" => Some(Self::monitoring()),
            _ => None,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Simulation error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// ============================================================================
// Simulator
// ============================================================================

/// Bin fleet simulator
///
/// # Determinism
///
/// All randomness goes through `rng_manager`. With a seed, the same config
/// produces the same fleet and the same sequence of ticks; timestamps are the
/// only thing that differ unless they are injected via the `*_at` methods.
pub struct Simulator {
    policy: FleetPolicy,

    /// Noise model built from `policy.noise`
    noise: Box<dyn FillNoise>,

    rng_manager: RngManager,

    time_manager: TimeManager,

    bin_count: usize,
    center: Position,
    spread_degrees: f64,
}

impl Simulator {
    /// Create a new simulator from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Simulator)` - Successfully initialized simulator
    /// * `Err(SimulationError)` - Configuration validation failed
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let rng_manager = match config.rng_seed {
            Some(seed) => RngManager::new(seed),
            None => RngManager::from_entropy(),
        };

        info!(
            "simulator ready: policy={}, bins={}, interval={}ms, seeded={}",
            config.policy.name,
            config.bin_count,
            config.tick_interval_ms,
            config.rng_seed.is_some()
        );

        Ok(Self {
            noise: config.policy.noise.build(),
            time_manager: TimeManager::new(config.tick_interval()),
            policy: config.policy,
            rng_manager,
            bin_count: config.bin_count,
            center: config.center,
            spread_degrees: config.spread_degrees,
        })
    }

    fn validate_config(config: &SimulatorConfig) -> Result<(), SimulationError> {
        Self::validate_layout(config.bin_count, config.spread_degrees)?;

        if config.tick_interval_ms == 0 {
            return Err(SimulationError::InvalidConfig(
                "tick_interval_ms must be positive".to_string(),
            ));
        }

        if !(config.center.lat.is_finite() && config.center.lng.is_finite()) {
            return Err(SimulationError::InvalidConfig(format!(
                "center must be finite, got {:?}",
                config.center
            )));
        }

        config.policy.validate().map_err(SimulationError::InvalidConfig)
    }

    fn validate_layout(bin_count: usize, spread_degrees: f64) -> Result<(), SimulationError> {
        if bin_count == 0 {
            return Err(SimulationError::InvalidConfig(
                "bin_count must be positive".to_string(),
            ));
        }

        if !(spread_degrees.is_finite() && spread_degrees > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "spread_degrees must be positive, got {}",
                spread_degrees
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Fleet lifecycle
    // ========================================================================

    /// Create the configured fleet, stamped with the current time
    pub fn initialize(&mut self) -> Fleet {
        self.initialize_at(Timestamp::now())
    }

    /// Create the configured fleet, stamped with `now`
    pub fn initialize_at(&mut self, now: Timestamp) -> Fleet {
        self.generate(self.bin_count, self.center, self.spread_degrees, now)
    }

    /// Create a fleet with an explicit layout instead of the configured one
    ///
    /// Fails when `count` is zero or `spread_degrees` is not positive.
    pub fn initialize_with(
        &mut self,
        count: usize,
        center: Position,
        spread_degrees: f64,
        now: Timestamp,
    ) -> Result<Fleet, SimulationError> {
        Self::validate_layout(count, spread_degrees)?;
        Ok(self.generate(count, center, spread_degrees, now))
    }

    fn generate(
        &mut self,
        count: usize,
        center: Position,
        spread_degrees: f64,
        now: Timestamp,
    ) -> Fleet {
        // a new fleet restarts the tick count
        self.time_manager = TimeManager::new(self.time_manager.tick_interval());

        let bins: Vec<Bin> = (1..=count)
            .map(|index| self.spawn_bin(index, center, spread_degrees, now))
            .collect();

        info!(
            "initialized fleet of {} bins around ({:.4}, {:.4})",
            count, center.lat, center.lng
        );

        // ids come from distinct indices, so they are unique
        Fleet::from_bins_unchecked(bins)
    }

    fn spawn_bin(
        &mut self,
        index: usize,
        center: Position,
        spread_degrees: f64,
        now: Timestamp,
    ) -> Bin {
        let rng = &mut self.rng_manager;

        let lat = center.lat + (rng.next_f64() - 0.5) * spread_degrees;
        let lng = center.lng + (rng.next_f64() - 0.5) * spread_degrees;
        let fill_level = rng.range_inclusive(0, 100) as f64;

        let bin = Bin::new(
            self.policy.id_format.format(index),
            Position::new(lat, lng),
            fill_level,
            now,
        );

        if self.policy.extended_attributes {
            bin.with_extended(ExtendedAttributes {
                priority: rng.range_inclusive(1, 10) as u8,
                predicted_overflow_hours: rng.range_inclusive(1, 8) as u32,
            })
        } else {
            bin
        }
    }

    /// Advance every bin by one tick, stamped with the current time
    pub fn tick(&mut self, fleet: &Fleet) -> Fleet {
        self.tick_at(fleet, Timestamp::now())
    }

    /// Advance every bin by one tick, stamped with `now`
    ///
    /// Returns a new snapshot with the same bins in the same order; only fill
    /// levels and update times change.
    pub fn tick_at(&mut self, fleet: &Fleet, now: Timestamp) -> Fleet {
        let mut status_changes = 0;

        let bins: Vec<Bin> = fleet
            .iter()
            .map(|bin| {
                let next = self.noise.apply(bin.fill_level(), &mut self.rng_manager);
                if self.policy.classify(next) != self.policy.classify(bin.fill_level()) {
                    status_changes += 1;
                }
                bin.with_fill(next, now)
            })
            .collect();

        self.time_manager.advance_tick(now);

        debug!(
            "tick {}: {} of {} bins changed status",
            self.time_manager.current_tick(),
            status_changes,
            bins.len()
        );

        Fleet::from_bins_unchecked(bins)
    }

    // ========================================================================
    // Queries (read-only)
    // ========================================================================

    pub fn classify(&self, fill_level: f64) -> Status {
        self.policy.classify(fill_level)
    }

    /// Route through the policy's qualifying bins, capped per policy
    pub fn select_route(&self, fleet: &Fleet) -> Result<Route, RouteError> {
        select_route_candidates(
            fleet,
            &self.policy.thresholds,
            self.policy.route.threshold,
            self.policy.route.max_stops,
        )
    }

    pub fn route_outcome(&self, fleet: &Fleet) -> RouteOutcome {
        RouteOutcome::from_result(&self.select_route(fleet), &self.policy)
    }

    pub fn stats(&self, fleet: &Fleet) -> FleetStats {
        FleetStats::compute(fleet, &self.policy.thresholds)
    }

    pub fn report(&self, fleet: &Fleet) -> FleetReport {
        FleetReport::build(fleet, &self.policy, self.time_manager.current_tick())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn policy(&self) -> &FleetPolicy {
        &self.policy
    }

    /// Ticks since the last `initialize*`
    pub fn current_tick(&self) -> usize {
        self.time_manager.current_tick()
    }

    pub fn tick_interval(&self) -> Duration {
        self.time_manager.tick_interval()
    }

    /// Current RNG state; a simulator seeded with it continues the same stream
    pub fn rng_state(&self) -> u64 {
        self.rng_manager.get_state()
    }
}
