//! Fill-level noise models
//!
//! Each tick every bin's fill level is nudged by a random amount drawn from
//! the policy's noise model, then clamped to [0, 100].
//!
//! # Models
//!
//! - **Uniform**: noise uniform in `[min, max)`, result left unrounded.
//!   The standard dashboard uses `[-5, 5)`, a zero-mean walk.
//! - **UniformRounded**: same draw, then the clamped result is rounded to
//!   `decimals` places. The monitoring dashboard uses `[-1.5, 2.5)` with one
//!   decimal, so its bins drift upwards by 0.5 points per tick on average.

use crate::models::bin::clamp_fill;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Most decimal places a rounded model may request
pub const MAX_DECIMALS: u32 = 6;

/// Perturbs one fill level per call
///
/// Implementations MUST return a value within [0, 100] for any input.
pub trait FillNoise: Send + Sync {
    /// Produce the next fill level for a bin currently at `fill_level`
    fn apply(&self, fill_level: f64, rng: &mut RngManager) -> f64;
}

/// Noise model selection, as stored in configuration files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoiseConfig {
    /// Uniform noise in `[min, max)`, no rounding
    Uniform { min: f64, max: f64 },

    /// Uniform noise in `[min, max)`, result rounded after clamping
    UniformRounded { min: f64, max: f64, decimals: u32 },
}

impl NoiseConfig {
    /// Instantiate the model this configuration describes
    pub fn build(&self) -> Box<dyn FillNoise> {
        match *self {
            NoiseConfig::Uniform { min, max } => Box::new(UniformNoise::new(min, max)),
            NoiseConfig::UniformRounded { min, max, decimals } => {
                Box::new(RoundedUniformNoise::new(UniformNoise::new(min, max), decimals))
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let (min, max) = match *self {
            NoiseConfig::Uniform { min, max } => (min, max),
            NoiseConfig::UniformRounded { min, max, decimals } => {
                if decimals > MAX_DECIMALS {
                    return Err(format!(
                        "noise rounding supports at most {} decimals, got {}",
                        MAX_DECIMALS, decimals
                    ));
                }
                (min, max)
            }
        };

        if min.is_finite() && max.is_finite() && min < max {
            Ok(())
        } else {
            Err(format!("noise range must satisfy min < max, got [{}, {})", min, max))
        }
    }
}

/// Adds uniform noise in `[min, max)` and clamps
///
/// # Example
/// ```
/// use bin_fleet_core_rs::policy::{FillNoise, UniformNoise};
/// use bin_fleet_core_rs::RngManager;
///
/// let noise = UniformNoise::new(-5.0, 5.0);
/// let mut rng = RngManager::new(1);
/// let next = noise.apply(100.0, &mut rng);
/// assert!(next >= 95.0 && next <= 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformNoise {
    min: f64,
    max: f64,
}

impl UniformNoise {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl FillNoise for UniformNoise {
    fn apply(&self, fill_level: f64, rng: &mut RngManager) -> f64 {
        clamp_fill(fill_level + rng.uniform(self.min, self.max))
    }
}

/// Wraps [`UniformNoise`] and rounds the clamped result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedUniformNoise {
    inner: UniformNoise,
    scale: f64,
}

impl RoundedUniformNoise {
    pub fn new(inner: UniformNoise, decimals: u32) -> Self {
        Self {
            inner,
            scale: 10f64.powi(decimals as i32),
        }
    }
}

impl FillNoise for RoundedUniformNoise {
    fn apply(&self, fill_level: f64, rng: &mut RngManager) -> f64 {
        let clamped = self.inner.apply(fill_level, rng);
        // non-negative input, so round() is round-half-up here
        clamp_fill((clamped * self.scale).round() / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_clamps_at_floor() {
        let noise = UniformNoise::new(-5.0, -4.0);
        let mut rng = RngManager::new(5);
        for _ in 0..100 {
            assert_eq!(noise.apply(0.0, &mut rng), 0.0);
        }
    }

    #[test]
    fn test_rounded_has_one_decimal() {
        let noise = RoundedUniformNoise::new(UniformNoise::new(-1.5, 2.5), 1);
        let mut rng = RngManager::new(77);
        let mut fill = 42.0;

        for _ in 0..500 {
            fill = noise.apply(fill, &mut rng);
            let tenths = fill * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9, "{} has more than one decimal", fill);
        }
    }

    #[test]
    fn test_validate_rejects_empty_range() {
        assert!(NoiseConfig::Uniform { min: 1.0, max: 1.0 }.validate().is_err());
        assert!(NoiseConfig::Uniform { min: f64::NAN, max: 1.0 }.validate().is_err());
        assert!(NoiseConfig::UniformRounded { min: -1.0, max: 1.0, decimals: 12 }
            .validate()
            .is_err());
        assert!(NoiseConfig::Uniform { min: -5.0, max: 5.0 }.validate().is_ok());
    }
}
