//! Action transition dispatch and execution logic.

use crate::action::{
    Action, ActionTransition, AutoSolveAction, BonusCountdownTickAction, BonusPrizeStepAction,
    BonusResultTimeoutAction, Effects, MysterySettleAction, MysteryStepAction, PlayerAction,
    RevealStepAction, SettleSpinAction, SystemStep, TieBreakSettleAction, TieBreakStepAction,
    WinnerTimeoutAction,
};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and collect effects
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<Effects, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let effects = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(effects)
}

/// Routes an action to its transition and normalizes the error type.
///
/// This is the internal implementation used by `GameEngine::execute()`.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<Effects, ExecuteError> {
    match action {
        Action::Player(kind) => match kind {
            PlayerAction::Spin(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::Spin)
            }
            PlayerAction::GuessConsonant(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::GuessConsonant)
            }
            PlayerAction::BuyVowel(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::BuyVowel)
            }
            PlayerAction::Solve(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::Solve)
            }
            PlayerAction::SkipWinner(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::AdvanceRound)
            }
            PlayerAction::BonusPickLetter(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::Bonus)
            }
            PlayerAction::BonusReady(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::Bonus)
            }
            PlayerAction::BonusSolve(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::Bonus)
            }
            PlayerAction::SkipBonusResult(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::Bonus)
            }
        },
        Action::System(step) => match step {
            SystemStep::SettleSpin => {
                drive_transition(&SettleSpinAction, state, env).map_err(ExecuteError::SettleSpin)
            }
            SystemStep::MysteryStep => {
                drive_transition(&MysteryStepAction, state, env).map_err(ExecuteError::Mystery)
            }
            SystemStep::MysterySettle => {
                drive_transition(&MysterySettleAction, state, env).map_err(ExecuteError::Mystery)
            }
            SystemStep::RevealStep => {
                drive_transition(&RevealStepAction, state, env).map_err(ExecuteError::Reveal)
            }
            SystemStep::AutoSolve => {
                drive_transition(&AutoSolveAction, state, env).map_err(ExecuteError::Reveal)
            }
            SystemStep::WinnerTimeout => drive_transition(&WinnerTimeoutAction, state, env)
                .map_err(ExecuteError::AdvanceRound),
            SystemStep::TieBreakStep => {
                drive_transition(&TieBreakStepAction, state, env).map_err(ExecuteError::TieBreak)
            }
            SystemStep::TieBreakSettle => {
                drive_transition(&TieBreakSettleAction, state, env).map_err(ExecuteError::TieBreak)
            }
            SystemStep::BonusPrizeStep => {
                drive_transition(&BonusPrizeStepAction, state, env).map_err(ExecuteError::Bonus)
            }
            SystemStep::BonusCountdownTick => {
                drive_transition(&BonusCountdownTickAction, state, env)
                    .map_err(ExecuteError::Bonus)
            }
            SystemStep::BonusResultTimeout => {
                drive_transition(&BonusResultTimeoutAction, state, env)
                    .map_err(ExecuteError::Bonus)
            }
        },
    }
}
