//! Simulator - owns the policy, random source and tick counter
//!
//! See `engine.rs` for the implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{SimulationError, Simulator, SimulatorConfig};
