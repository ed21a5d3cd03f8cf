//! Domain models for the bin fleet simulator

pub mod bin;
pub mod fleet;
pub mod position;
pub mod status;

// Re-exports
pub use bin::{Bin, ExtendedAttributes};
pub use fleet::{Fleet, FleetError};
pub use position::{Bounds, Position};
pub use status::{Status, StatusThresholds};
