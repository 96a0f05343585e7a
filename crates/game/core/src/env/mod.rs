//! Deterministic environment supplied to the engine on each action.
//!
//! The engine never reaches out to wall clocks or OS entropy; everything
//! nondeterministic comes in through [`GameEnv`] so that a session can be
//! replayed from its seed and action log.

pub mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::config::EngineConfig;

/// Read-only environment handed to every transition.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    /// Tunable rule constants (vowel cost, reveal timings, ...).
    pub config: &'a EngineConfig,
    /// Deterministic randomness source.
    pub rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a EngineConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }
}
