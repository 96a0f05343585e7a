use crate::cues::{Cue, CueRequest};
use crate::env::GameEnv;
use crate::state::GameState;

/// Presentation side effects produced by a transition.
///
/// Cues never feed back into state; they exist so the driver can forward
/// them to the audio/render ports without inspecting the state diff.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub cues: Vec<CueRequest>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn cue(cue: Cue) -> Self {
        Self {
            cues: vec![CueRequest::play(cue)],
        }
    }

    pub fn push(&mut self, request: CueRequest) {
        self.cues.push(request);
    }
}

/// Defines how a concrete action variant mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks
/// receive read-only access to deterministic environment facts via
/// [`GameEnv`]; validation hooks must stay side-effect free.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    /// Implementations may assume `pre_validate` has already passed.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Effects, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
