//! Deterministic random number generation for card rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Weighted sampling**: Discrete distributions for tier/quality/stat rolls
//!
//! ## Usage
//!
//! ```
//! use starcore_forge::core::ForgeRng;
//!
//! let mut rng = ForgeRng::new(42);
//! let v = rng.gen_range(1..11);
//! assert!((1..11).contains(&v));
//!
//! // Same seed replays the same rolls
//! let mut replay = ForgeRng::new(42);
//! assert_eq!(replay.gen_range(1..11), v);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing all card generation rolls.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// State capture makes a generation run reproducible from a saved checkpoint.
#[derive(Clone, Debug)]
pub struct ForgeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ForgeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from the operating system entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given half-open range.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Choose an index with weighted probability.
    ///
    /// Weights do not need to sum to 1.0.
    /// Returns `None` if weights are empty or all zero.
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total: f32 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f32>() * total;

        for (i, &weight) in weights.iter().enumerate() {
            threshold -= weight;
            if threshold <= 0.0 {
                return Some(i);
            }
        }

        // Floating point edge case - return last non-zero weight
        Some(weights.len() - 1)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ForgeRngState {
        ForgeRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ForgeRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgeRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = ForgeRng::new(42);
        let mut rng2 = ForgeRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000), rng2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = ForgeRng::new(1);
        let mut rng2 = ForgeRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_choose_weighted() {
        let mut rng = ForgeRng::new(42);

        // Heavily weighted towards index 0
        let weights = vec![100.0, 0.0, 0.0];
        for _ in 0..10 {
            assert_eq!(rng.choose_weighted(&weights), Some(0));
        }

        // Empty weights
        assert_eq!(rng.choose_weighted(&[]), None);

        // All zero weights
        assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);
    }

    #[test]
    fn test_choose_weighted_in_bounds() {
        let mut rng = ForgeRng::new(7);
        let weights: Vec<f32> = (0..10).map(|i| 1.0 + i as f32).collect();

        for _ in 0..1000 {
            let idx = rng.choose_weighted(&weights).unwrap();
            assert!(idx < weights.len());
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = ForgeRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.gen_range(0..1000);
        }

        // Save state
        let state = rng.state();

        // Continue generating
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range(0..1000)).collect();

        // Restore and verify
        let mut restored = ForgeRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = ForgeRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ForgeRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
