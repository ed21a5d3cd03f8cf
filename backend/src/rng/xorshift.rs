//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. A simulator built without a
//! seed draws one from OS entropy ([`RngManager::from_entropy`]), which keeps
//! the default behavior non-reproducible while still letting tests pin it.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use bin_fleet_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let fill = rng.range_inclusive(0, 100); // [0, 100]
/// assert!((0..=100).contains(&fill));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1 (xorshift cannot leave the zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create a new RNG seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Generate random value in range [min, max]
    ///
    /// # Example
    /// ```
    /// use bin_fleet_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// let priority = rng.range_inclusive(1, 10);
    /// assert!((1..=10).contains(&priority));
    /// ```
    pub fn range_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.range(min, max + 1)
    }

    /// Get current RNG state (for replaying from this point)
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) by dividing by 2^64
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random f64 in range [min, max)
    ///
    /// # Example
    /// ```
    /// use bin_fleet_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(99);
    /// let noise = rng.uniform(-5.0, 5.0);
    /// assert!(noise >= -5.0 && noise < 5.0);
    /// ```
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = RngManager::new(0);
        assert_ne!(rng.get_state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    #[should_panic(expected = "min must be less than max")]
    fn test_range_invalid_bounds() {
        let mut rng = RngManager::new(12345);
        rng.range(100, 50);
    }

    #[test]
    fn test_range_inclusive_hits_both_ends() {
        let mut rng = RngManager::new(2024);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..10_000 {
            let v = rng.range_inclusive(1, 8);
            assert!((1..=8).contains(&v));
            seen_min |= v == 1;
            seen_max |= v == 8;
        }

        assert!(seen_min && seen_max, "both bounds should be reachable");
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = RngManager::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_uniform_respects_asymmetric_bounds() {
        let mut rng = RngManager::new(31);

        for _ in 0..1000 {
            let val = rng.uniform(-1.5, 2.5);
            assert!((-1.5..2.5).contains(&val));
        }
    }

    #[test]
    fn test_entropy_seeded_rngs_differ() {
        let a = RngManager::from_entropy();
        let b = RngManager::from_entropy();
        // 2^-64 chance of a false failure
        assert_ne!(a.get_state(), b.get_state());
    }
}
