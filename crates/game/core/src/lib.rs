//! Deterministic game logic for a wheel-spinning word-guessing party game.
//!
//! `jontune-core` defines the canonical rules (actions, engine, state) and
//! exposes pure APIs reusable by the runtime and offline tools. All state
//! mutation flows through [`engine::GameEngine`]; randomness and timing
//! come in from outside, so a session replays exactly from its seed and
//! action log.
pub mod action;
pub mod config;
pub mod cues;
pub mod engine;
pub mod env;
pub mod state;
pub mod wheel;

pub use action::{
    Action, ActionTransition, BonusError, Effects, LetterError, PlayerAction, RoundError,
    SolveError, SpinError, SystemStep,
};
pub use config::EngineConfig;
pub use cues::{Cue, CueOp, CueRequest};
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{GameEnv, PcgRng, RngOracle, compute_seed};
pub use state::{
    Board, BoardCell, BonusResult, BonusState, BonusStep, GamePhase, GameState, GameStats,
    LandedOutcome, LandedWedge, MainStep, PendingStep, Puzzle, Team, TeamStats, TieBreakState,
    TurnState, WheelState, is_letter, is_vowel,
};
pub use wheel::{
    MysteryCycle, MysteryStepResult, PRIZE_POOL, Prize, SpinOutcome, Wedge, WedgeKind, WedgeSet,
    resolve_spin,
};
