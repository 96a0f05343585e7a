//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. All
//! state mutations, player actions and scheduled system steps alike, flow
//! through the same `execute()` pipeline, so an action log plus the game
//! seed reproduces a session exactly.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::Action;
use crate::cues::CueRequest;
use crate::env::GameEnv;
use crate::state::{GamePhase, GameState, PendingStep};

/// Complete outcome of action execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Presentation cues to forward to the audio/render ports.
    pub cues: Vec<CueRequest>,
}

/// Drives [`GameState`] through the three-phase action pipeline:
/// pre_validate → apply → post_validate.
///
/// System steps carry an extra guard: they only execute if they match the
/// currently scheduled [`PendingStep`], which is consumed before dispatch.
/// A stale timer firing after the player already moved on is rejected
/// here instead of corrupting state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through the transition pipeline.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let consumed = self.consume_schedule(action)?;

        match transition::execute_transition(action, self.state, &env) {
            Ok(effects) => {
                self.state.nonce += 1;
                Ok(ExecutionOutcome { cues: effects.cues })
            }
            Err(error) => {
                // A rejected step must not wipe the schedule it consumed.
                if self.state.pending.is_none() {
                    self.state.pending = consumed;
                }
                Err(error)
            }
        }
    }

    /// Validates the action against the scheduler, consuming the pending
    /// step when a system step matches it.
    fn consume_schedule(&mut self, action: &Action) -> Result<Option<PendingStep>, ExecuteError> {
        match action {
            Action::Player(_) => {
                if self.state.phase == GamePhase::Done {
                    return Err(ExecuteError::GameOver);
                }
                Ok(None)
            }
            Action::System(step) => match self.state.pending {
                Some(pending) if pending.step == *step => {
                    self.state.pending = None;
                    Ok(Some(pending))
                }
                other => Err(ExecuteError::StaleSystemStep {
                    step: *step,
                    scheduled: other.map(|p| p.step),
                }),
            },
        }
    }
}
