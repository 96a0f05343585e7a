//! RNG oracle for deterministic random number generation.
//!
//! This module provides a trait-based RNG system so that every random event
//! in a session (spin offsets, mystery prize draws, tie-break selection) is
//! reproducible from the session seed.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same value. This is what makes a session fully
//! replayable from its seed and action log.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }

    /// Pick an index into a collection of `len` elements.
    ///
    /// Returns 0 for empty collections; callers handle that case themselves.
    fn index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }

    /// Generate a value in the half-open unit interval [0, 1).
    ///
    /// Used for angular offsets on the wheel.
    fn unit_f64(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
/// - **Good quality**: Passes statistical tests (PractRand, TestU01)
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
/// - Implementation based on PCG-XSH-RR variant
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    ///
    /// Uses LCG (Linear Congruential Generator) formula:
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    ///
    /// This is where the "permutation" happens - transforms the LCG state
    /// into high-quality random output.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;

        // Random rotation provides the final permutation
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute deterministic seed from game state components.
///
/// Combines multiple entropy sources to ensure unique seeds for each
/// random event in the game.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start (for replay/determinism)
/// * `nonce` - Action sequence number (increments each action)
/// * `context` - Additional context for multiple draws in the same action
///
/// # Context Values
///
/// Use different context values when the same action needs multiple
/// independent random draws:
///
/// - `0`: Primary draw (e.g., extra wheel turns)
/// - `1`: Secondary draw (e.g., terminal angular offset)
/// - etc.
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    // Mix all inputs using simple hash combiners
    // These constants are based on SplitMix64 and FxHash multipliers
    let mut hash = game_seed;

    // Mix in nonce (action sequence)
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);

    // Mix in context
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_eq!(rng.unit_f64(7), rng.unit_f64(7));
    }

    #[test]
    fn unit_f64_stays_in_half_open_interval() {
        let rng = PcgRng;
        for seed in 0..1000 {
            let v = rng.unit_f64(seed);
            assert!((0.0..1.0).contains(&v), "seed {seed} produced {v}");
        }
    }

    #[test]
    fn range_is_inclusive_and_clamped() {
        let rng = PcgRng;
        for seed in 0..1000 {
            let v = rng.range(seed, 20, 30);
            assert!((20..=30).contains(&v));
        }
        assert_eq!(rng.range(1, 5, 5), 5);
        assert_eq!(rng.range(1, 9, 3), 9);
    }

    #[test]
    fn compute_seed_varies_by_context() {
        let a = compute_seed(1, 1, 0);
        let b = compute_seed(1, 1, 1);
        let c = compute_seed(1, 2, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
