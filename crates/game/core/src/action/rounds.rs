//! Round-to-round progression: winner screen, next puzzle, tie-break,
//! and the handoff into the bonus round.

use crate::action::{ActionTransition, Effects, SystemStep};
use crate::cues::Cue;
use crate::env::GameEnv;
use crate::state::{
    Board, BonusState, BonusStep, GamePhase, GameState, MainStep, TieBreakState,
};
use crate::wheel::MysteryCycle;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("no winner announcement is showing")]
    NotWinnerPhase,
    #[error("no tie-break is running")]
    NotTieBreak,
    #[error("tie-break has not finished cycling")]
    TieBreakUnfinished,
}

/// Winner announcement expired without being skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinnerTimeoutAction;

impl ActionTransition for WinnerTimeoutAction {
    type Error = RoundError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), RoundError> {
        if state.phase != GamePhase::Main(MainStep::Winner) {
            return Err(RoundError::NotWinnerPhase);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, RoundError> {
        Ok(advance_round(state, env))
    }
}

/// Player dismisses the winner announcement early.
///
/// Shares the advance path with the timeout; the scheduler guard in the
/// engine makes sure the two can never both fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkipWinnerAction;

impl ActionTransition for SkipWinnerAction {
    type Error = RoundError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), RoundError> {
        if state.phase != GamePhase::Main(MainStep::Winner) {
            return Err(RoundError::NotWinnerPhase);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, RoundError> {
        Ok(advance_round(state, env))
    }
}

/// One frame of the tie-break highlight animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TieBreakStepAction;

impl ActionTransition for TieBreakStepAction {
    type Error = RoundError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), RoundError> {
        if state.phase != GamePhase::TieBreak || state.tie_break.is_none() {
            return Err(RoundError::NotTieBreak);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, RoundError> {
        // Draw context 0: final winner pick among the contenders.
        let pick_seed = state.seed(0);
        let tie_break = state.tie_break.as_mut().ok_or(RoundError::NotTieBreak)?;

        tie_break.steps_left = tie_break.steps_left.saturating_sub(1);
        if tie_break.steps_left == 0 {
            // The cosmetic walk is over; the winner is a fresh uniform
            // draw, independent of where the highlight stopped.
            let winner =
                tie_break.contenders[env.rng.index(pick_seed, tie_break.contenders.len())];
            tie_break.highlighted = Some(winner);
            state.schedule(SystemStep::TieBreakSettle, env.config.tie_break_settle_ms);
        } else {
            tie_break.cursor = (tie_break.cursor + 1) % tie_break.contenders.len();
            tie_break.highlighted = Some(tie_break.contenders[tie_break.cursor]);
            state.schedule(SystemStep::TieBreakStep, env.config.tie_break_step_ms);
        }
        Ok(Effects::none())
    }
}

/// Tie-break winner has been shown; hand off to the bonus round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TieBreakSettleAction;

impl ActionTransition for TieBreakSettleAction {
    type Error = RoundError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), RoundError> {
        let Some(tie_break) = state.tie_break.as_ref() else {
            return Err(RoundError::NotTieBreak);
        };
        if state.phase != GamePhase::TieBreak {
            return Err(RoundError::NotTieBreak);
        }
        if tie_break.steps_left != 0 || tie_break.highlighted.is_none() {
            return Err(RoundError::TieBreakUnfinished);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, RoundError> {
        let winner = state
            .tie_break
            .take()
            .and_then(|t| t.highlighted)
            .ok_or(RoundError::TieBreakUnfinished)?;
        Ok(enter_bonus(state, env, winner))
    }
}

/// Advance past a completed puzzle: next round, or the endgame.
pub(crate) fn advance_round(state: &mut GameState, env: &GameEnv<'_>) -> Effects {
    state.puzzle_index += 1;

    if let Some(puzzle) = state.puzzles.get(state.puzzle_index) {
        state.board = Board::from_puzzle(puzzle);
        if !state.teams.is_empty() {
            state.round_starter = (state.round_starter + 1) % state.teams.len();
        }
        state.turn.reset_for_puzzle(state.round_starter);
        for team in &mut state.teams {
            team.clear_round();
        }
        state.phase = GamePhase::Main(MainStep::Idle);
        state.pending = None;
        return Effects::cue(Cue::StartGame);
    }

    // Main rounds exhausted: pick who plays the bonus round.
    if state.teams.is_empty() {
        state.phase = GamePhase::Done;
        state.pending = None;
        return Effects::none();
    }
    let leaders = state.leaders();
    if leaders.len() == 1 {
        return enter_bonus(state, env, leaders[0]);
    }

    // Draw context 0: tie-break animation length.
    let steps = 20 + env.rng.range(state.seed(0), 0, 15);
    state.tie_break = Some(TieBreakState {
        contenders: leaders,
        highlighted: None,
        cursor: 0,
        steps_left: steps,
    });
    state.phase = GamePhase::TieBreak;
    state.schedule(SystemStep::TieBreakStep, env.config.tie_break_step_ms);
    Effects::none()
}

/// Start the bonus round for the given team.
pub(crate) fn enter_bonus(state: &mut GameState, env: &GameEnv<'_>, team: usize) -> Effects {
    if state.bonus_pool.is_empty() {
        state.phase = GamePhase::Done;
        state.pending = None;
        return Effects::none();
    }

    // Draw contexts: 0 = bonus puzzle pick, 1 = prize cycle length.
    let puzzle = &state.bonus_pool[env.rng.index(state.seed(0), state.bonus_pool.len())];
    state.board = Board::from_puzzle(puzzle);

    let mut bonus = BonusState::new(team);
    bonus.cycle = Some(MysteryCycle::start(env.rng, state.seed(1), 30, 20));
    state.bonus = Some(bonus);
    state.phase = GamePhase::Bonus(BonusStep::PrizeCycling);
    state.schedule(SystemStep::BonusPrizeStep, env.config.mystery_step_ms);
    Effects::cue(Cue::StartGame)
}
