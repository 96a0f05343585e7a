//! Spinning the wheel and resolving what it landed on.

use crate::action::{ActionTransition, Effects, SystemStep};
use crate::cues::Cue;
use crate::env::GameEnv;
use crate::state::{GamePhase, GameState, LandedOutcome, LandedWedge, MainStep};
use crate::wheel::{MysteryCycle, MysteryStepResult, WedgeKind, resolve_spin};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpinError {
    #[error("spinning is only allowed from idle (currently {phase:?})")]
    NotIdle { phase: GamePhase },
    #[error("puzzle is already being finished")]
    PuzzleFinishing,
    #[error("board is already fully revealed")]
    BoardRevealed,
    #[error("wheel is not traveling")]
    NotSpinning,
    #[error("no mystery cycle is running")]
    NoMysteryCycle,
    #[error("mystery prize has not committed yet")]
    MysteryNotCommitted,
}

/// Player holds and releases the spin control with some charge power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpinAction {
    /// Charge power, clamped to 0..=100.
    pub power: u8,
}

impl ActionTransition for SpinAction {
    type Error = SpinError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), SpinError> {
        if state.phase != GamePhase::Main(MainStep::Idle) {
            return Err(SpinError::NotIdle { phase: state.phase });
        }
        if state.turn.finishing {
            return Err(SpinError::PuzzleFinishing);
        }
        if state.board.is_fully_revealed() {
            return Err(SpinError::BoardRevealed);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, SpinError> {
        let power = self.power.min(100);
        // Draw contexts: 0 = extra turns, 1 = terminal offset.
        let outcome = resolve_spin(
            &state.wheel.set,
            power,
            state.wheel.rotation,
            env.rng,
            state.seed(0),
            state.seed(1),
        );

        state.wheel.rotation = outcome.rotation;
        state.stats.team_mut(state.turn.active_team).spins += 1;
        state.turn.has_spun = true;
        // A new spin supersedes any previous landing and its attribution.
        state.turn.landed = None;
        state.turn.pending_landing = outcome.landed;
        state.phase = GamePhase::Main(MainStep::Spinning);
        state.schedule(SystemStep::SettleSpin, env.config.spin_settle_ms(power));

        Ok(Effects::cue(Cue::Spin))
    }
}

/// The wheel came to rest; interpret the wedge under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleSpinAction;

impl ActionTransition for SettleSpinAction {
    type Error = SpinError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), SpinError> {
        if state.phase != GamePhase::Main(MainStep::Spinning) {
            return Err(SpinError::NotSpinning);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, SpinError> {
        let team_count = state.teams.len();
        let active = state.turn.active_team;

        // A degenerate wheel (no landing) behaves as a plain turn pass.
        let Some(kind) = state
            .turn
            .pending_landing
            .and_then(|i| state.wheel.set.get(i).map(|w| w.kind))
        else {
            state.turn.pass_turn(team_count);
            state.phase = GamePhase::Main(MainStep::Idle);
            return Ok(Effects::none());
        };
        let index = state.turn.pending_landing.unwrap_or_default();

        let effects = match kind {
            WedgeKind::Cash(value) => {
                state.turn.landed = Some(LandedWedge {
                    wedge_index: index,
                    outcome: LandedOutcome::Cash(value),
                    owner: active,
                    prize_captured: false,
                });
                state.turn.pending_landing = None;
                state.phase = GamePhase::Main(MainStep::AwaitingConsonant);
                Effects::cue(Cue::CashLand)
            }
            WedgeKind::TShirt => {
                state.turn.landed = Some(LandedWedge {
                    wedge_index: index,
                    outcome: LandedOutcome::Prize(crate::wheel::Prize::TShirt),
                    owner: active,
                    prize_captured: false,
                });
                state.turn.pending_landing = None;
                state.phase = GamePhase::Main(MainStep::AwaitingConsonant);
                Effects::cue(Cue::TShirt)
            }
            WedgeKind::Bankrupt => {
                state.stats.team_mut(active).bankrupts += 1;
                state.active_team_mut().clear_round();
                state.turn.pass_turn(team_count);
                state.phase = GamePhase::Main(MainStep::Idle);
                Effects::cue(Cue::Bankrupt)
            }
            WedgeKind::LoseTurn => {
                state.stats.team_mut(active).lose_turns += 1;
                state.turn.pass_turn(team_count);
                state.phase = GamePhase::Main(MainStep::Idle);
                Effects::cue(Cue::Buzzer)
            }
            WedgeKind::Mystery => {
                // Keep pending_landing so the commit step can attribute
                // the prize to this wedge.
                let cycle_seed = state.seed(0);
                state.turn.mystery = Some(MysteryCycle::start(env.rng, cycle_seed, 20, 10));
                state.phase = GamePhase::Main(MainStep::MysteryCycling);
                state.schedule(SystemStep::MysteryStep, env.config.mystery_step_ms);
                Effects::cue(Cue::MysteryLand)
            }
        };
        Ok(effects)
    }
}

/// One frame of the mystery prize animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MysteryStepAction;

impl ActionTransition for MysteryStepAction {
    type Error = SpinError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), SpinError> {
        if state.phase != GamePhase::Main(MainStep::MysteryCycling) {
            return Err(SpinError::NotIdle { phase: state.phase });
        }
        if state.turn.mystery.is_none() {
            return Err(SpinError::NoMysteryCycle);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, SpinError> {
        let commit_seed = state.seed(0);
        let result = {
            let cycle = state.turn.mystery.as_mut().ok_or(SpinError::NoMysteryCycle)?;
            cycle.step(env.rng, commit_seed)
        };

        match result {
            MysteryStepResult::Cycling(_) => {
                state.schedule(SystemStep::MysteryStep, env.config.mystery_step_ms);
                Ok(Effects::none())
            }
            MysteryStepResult::Committed(prize) => {
                let index = state.turn.pending_landing.take().unwrap_or_default();
                state.turn.landed = Some(LandedWedge {
                    wedge_index: index,
                    outcome: LandedOutcome::Prize(prize),
                    owner: state.turn.active_team,
                    prize_captured: false,
                });
                state.turn.mystery = None;
                state.schedule(SystemStep::MysterySettle, env.config.mystery_settle_ms);
                Ok(Effects::none())
            }
        }
    }
}

/// Committed mystery prize has been shown; open the consonant guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MysterySettleAction;

impl ActionTransition for MysterySettleAction {
    type Error = SpinError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), SpinError> {
        if state.phase != GamePhase::Main(MainStep::MysteryCycling) {
            return Err(SpinError::NotIdle { phase: state.phase });
        }
        if state.turn.mystery.is_some() || state.turn.landed.is_none() {
            return Err(SpinError::MysteryNotCommitted);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Effects, SpinError> {
        state.phase = GamePhase::Main(MainStep::AwaitingConsonant);
        Ok(Effects::none())
    }
}
