//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for data files:
//! - Puzzle sets (data-driven via JSON)
//! - Wheel wedge layouts (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Every loader has a built-in fallback so a session can always start, even
//! offline with no content files at all.
//!
//! All loaders use jontune-core types directly with serde deserialization.

pub mod loaders;

pub use loaders::{ConfigLoader, PuzzleLoader, PuzzleSet, WedgeLoader, fallback_puzzles, standard_wheel};
