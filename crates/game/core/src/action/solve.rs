//! Explicit solve attempts and the shared puzzle-completion sequence.

use crate::action::{ActionTransition, Effects, SystemStep};
use crate::cues::Cue;
use crate::env::GameEnv;
use crate::state::{GamePhase, GameState, LandedOutcome, LandedWedge, MainStep};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("solving is not allowed right now (currently {phase:?})")]
    WrongPhase { phase: GamePhase },
    #[error("puzzle is already being finished")]
    AlreadyFinishing,
    #[error("nobody has spun yet this puzzle")]
    MustSpinFirst,
    #[error("board is already fully revealed")]
    BoardRevealed,
}

/// Active team submits a full-answer guess.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SolveAction {
    pub guess: String,
}

impl ActionTransition for SolveAction {
    type Error = SolveError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), SolveError> {
        // Solving stays open while the mystery animation runs so a sharp
        // player is not blocked by the overlay.
        match state.phase {
            GamePhase::Main(
                MainStep::Idle | MainStep::AwaitingConsonant | MainStep::MysteryCycling,
            ) => {}
            _ => return Err(SolveError::WrongPhase { phase: state.phase }),
        }
        if state.turn.finishing {
            return Err(SolveError::AlreadyFinishing);
        }
        if !state.turn.has_spun {
            return Err(SolveError::MustSpinFirst);
        }
        if state.board.is_fully_revealed() {
            return Err(SolveError::BoardRevealed);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, SolveError> {
        if state.board.matches_guess(&self.guess) {
            return Ok(finish_puzzle(state, env));
        }

        let active = state.turn.active_team;
        state.stats.team_mut(active).incorrect_guesses += 1;

        // A solve mid-cycle still commits the prize to the spinner; the
        // landing keeps its owner even though the turn passes.
        if let Some(mut cycle) = state.turn.mystery.take() {
            let prize = cycle.finalize_early(env.rng, state.seed(2));
            let index = state.turn.pending_landing.unwrap_or_default();
            state.turn.landed = Some(LandedWedge {
                wedge_index: index,
                outcome: LandedOutcome::Prize(prize),
                owner: active,
                prize_captured: false,
            });
        }

        state.turn.pass_turn(state.teams.len());
        state.phase = GamePhase::Main(MainStep::Idle);
        state.pending = None;
        Ok(Effects::cue(Cue::Buzzer))
    }
}

/// Run the puzzle-completion sequence for the active team.
///
/// The `finishing` flag set here is the re-entrancy guard: every path
/// into completion (manual solve, auto-solve) checks it first, so the
/// solve bonus can never be awarded twice for one puzzle.
pub(crate) fn finish_puzzle(state: &mut GameState, env: &GameEnv<'_>) -> Effects {
    let solver = state.turn.active_team;
    state.turn.finishing = true;
    state.turn.solver = Some(solver);
    state.stats.team_mut(solver).puzzles_solved += 1;

    // An interrupted mystery cycle commits now, owned by the solver who
    // was also the spinner.
    if let Some(mut cycle) = state.turn.mystery.take() {
        let prize = cycle.finalize_early(env.rng, state.seed(2));
        let index = state.turn.pending_landing.take().unwrap_or_default();
        state.turn.landed = Some(LandedWedge {
            wedge_index: index,
            outcome: LandedOutcome::Prize(prize),
            owner: solver,
            prize_captured: false,
        });
    }

    // An uncaptured prize on the landing is awarded only if the landing
    // owner is the solver; a wedge landed by one team never pays another.
    if let Some(landed) = state.turn.landed.as_mut() {
        if let LandedOutcome::Prize(prize) = landed.outcome {
            if !landed.prize_captured && landed.owner == solver {
                landed.prize_captured = true;
                state.teams[solver].holding.push(prize);
            }
        }
    }

    let bonus = env.config.solve_bonus;
    for (i, team) in state.teams.iter_mut().enumerate() {
        if i == solver {
            team.bank_round(bonus);
        } else {
            team.clear_round();
        }
    }

    state.turn.reveal_queue = state.board.unrevealed_letter_indices().into();
    state.phase = GamePhase::Main(MainStep::Revealing);
    state.schedule(SystemStep::RevealStep, env.config.solve_reveal_ms);
    Effects::cue(Cue::Solve)
}
