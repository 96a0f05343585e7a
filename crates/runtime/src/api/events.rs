//! Events broadcast to session subscribers.

use jontune_core::{Action, CueRequest, GamePhase};

/// Notifications published by the session worker.
///
/// Subscribers that only render can watch `PhaseChanged`/`WheelMoved`;
/// audio layers watch `Cue`. Delivery is lossy under backpressure
/// (broadcast semantics), so none of these may carry authoritative state.
#[derive(Clone, Debug)]
pub enum GameEvent {
    /// A presentation cue fired.
    Cue(CueRequest),
    /// An action was applied; the phase is the post-action phase.
    ActionApplied { action: Action, phase: GamePhase },
    /// A player action was rejected by the engine.
    ActionRejected { action: Action, reason: String },
    /// The wheel rotation changed.
    WheelMoved { rotation: f64 },
    /// The game phase changed.
    PhaseChanged { phase: GamePhase },
    /// Spin charge power changed while the spin control is held.
    ChargeTick { power: u8 },
}
