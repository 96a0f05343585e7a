//! Error types for the action execution pipeline.

use crate::action::{BonusError, LetterError, RoundError, SolveError, SpinError, SystemStep};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("spin failed: {0}")]
    Spin(TransitionPhaseError<SpinError>),

    #[error("spin settle failed: {0}")]
    SettleSpin(TransitionPhaseError<SpinError>),

    #[error("mystery step failed: {0}")]
    Mystery(TransitionPhaseError<SpinError>),

    #[error("consonant guess failed: {0}")]
    GuessConsonant(TransitionPhaseError<LetterError>),

    #[error("vowel purchase failed: {0}")]
    BuyVowel(TransitionPhaseError<LetterError>),

    #[error("reveal step failed: {0}")]
    Reveal(TransitionPhaseError<LetterError>),

    #[error("solve failed: {0}")]
    Solve(TransitionPhaseError<SolveError>),

    #[error("round advance failed: {0}")]
    AdvanceRound(TransitionPhaseError<RoundError>),

    #[error("tie-break step failed: {0}")]
    TieBreak(TransitionPhaseError<RoundError>),

    #[error("bonus round action failed: {0}")]
    Bonus(TransitionPhaseError<BonusError>),

    #[error("game is over; no further actions are accepted")]
    GameOver,

    #[error("system step {step} is not the scheduled step ({scheduled:?})")]
    StaleSystemStep {
        step: SystemStep,
        scheduled: Option<SystemStep>,
    },
}
