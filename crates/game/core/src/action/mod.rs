//! Actions: every way game state is allowed to change.
//!
//! Player actions arrive from input; system steps arrive from the
//! scheduler when a [`crate::state::PendingStep`] fires. Both run through
//! the same three-phase transition pipeline in the engine.

mod bonus;
mod letters;
mod rounds;
mod solve;
mod spin;
mod transition;

pub use bonus::{
    BonusCountdownTickAction, BonusError, BonusPickLetterAction, BonusPrizeStepAction,
    BonusReadyAction, BonusResultTimeoutAction, BonusSolveAction, SkipBonusResultAction,
};
pub use letters::{AutoSolveAction, BuyVowelAction, GuessConsonantAction, LetterError, RevealStepAction};
pub use rounds::{RoundError, SkipWinnerAction, TieBreakSettleAction, TieBreakStepAction, WinnerTimeoutAction};
pub use solve::{SolveAction, SolveError};
pub use spin::{MysterySettleAction, MysteryStepAction, SettleSpinAction, SpinAction, SpinError};
pub use transition::{ActionTransition, Effects};

/// A player-initiated action.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PlayerAction {
    Spin(SpinAction),
    GuessConsonant(GuessConsonantAction),
    BuyVowel(BuyVowelAction),
    Solve(SolveAction),
    SkipWinner(SkipWinnerAction),
    BonusPickLetter(BonusPickLetterAction),
    BonusReady(BonusReadyAction),
    BonusSolve(BonusSolveAction),
    SkipBonusResult(SkipBonusResultAction),
}

/// A scheduler-initiated step.
///
/// Fieldless so it can sit in [`crate::state::PendingStep`] as plain data;
/// the matching transition carries no payload beyond current state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, strum::Display, serde::Serialize, serde::Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SystemStep {
    /// Wheel stopped; resolve the landed wedge.
    SettleSpin,
    /// Advance the mystery prize animation one step.
    MysteryStep,
    /// Mystery prize committed; open the consonant guess.
    MysterySettle,
    /// Reveal the next queued board cell.
    RevealStep,
    /// Board fully revealed without a solve; credit the active team.
    AutoSolve,
    /// Winner announcement expired; advance the round.
    WinnerTimeout,
    /// Advance the tie-break animation one step.
    TieBreakStep,
    /// Tie-break winner shown long enough; start the bonus round.
    TieBreakSettle,
    /// Advance the bonus prize animation one step.
    BonusPrizeStep,
    /// One second elapsed on the bonus clock.
    BonusCountdownTick,
    /// Bonus result screen expired; end the game.
    BonusResultTimeout,
}

/// Top-level action: player input or a fired scheduled step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    Player(PlayerAction),
    System(SystemStep),
}

impl Action {
    pub fn spin(power: u8) -> Self {
        Self::Player(PlayerAction::Spin(SpinAction { power }))
    }

    pub fn guess_consonant(letter: char) -> Self {
        Self::Player(PlayerAction::GuessConsonant(GuessConsonantAction { letter }))
    }

    pub fn buy_vowel(letter: char) -> Self {
        Self::Player(PlayerAction::BuyVowel(BuyVowelAction { letter }))
    }

    pub fn solve(guess: impl Into<String>) -> Self {
        Self::Player(PlayerAction::Solve(SolveAction {
            guess: guess.into(),
        }))
    }

    pub fn skip_winner() -> Self {
        Self::Player(PlayerAction::SkipWinner(SkipWinnerAction))
    }

    pub fn bonus_pick_letter(letter: char) -> Self {
        Self::Player(PlayerAction::BonusPickLetter(BonusPickLetterAction { letter }))
    }

    pub fn bonus_ready() -> Self {
        Self::Player(PlayerAction::BonusReady(BonusReadyAction))
    }

    pub fn bonus_solve(guess: impl Into<String>) -> Self {
        Self::Player(PlayerAction::BonusSolve(BonusSolveAction {
            guess: guess.into(),
        }))
    }

    pub fn skip_bonus_result() -> Self {
        Self::Player(PlayerAction::SkipBonusResult(SkipBonusResultAction))
    }

    pub fn system(step: SystemStep) -> Self {
        Self::System(step)
    }
}
