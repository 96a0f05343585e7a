//! Presentation cues emitted by transitions.
//!
//! Cues are fire-and-forget hints to the presentation layer (sound
//! effects, mostly). They never feed back into game state, so a session
//! replays identically whether or not anything listens to them.

use strum::{Display, EnumString};

/// A nameable presentation moment.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, serde::Serialize, serde::Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Cue {
    Spin,
    CorrectLetter,
    WrongLetter,
    Buzzer,
    Bankrupt,
    Solve,
    MysteryLand,
    TShirt,
    CashLand,
    ChargeUp,
    StartGame,
}

/// How the presentation layer should treat the cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CueOp {
    /// Play once.
    Play,
    /// Stop if currently playing.
    Stop,
    /// Play looping until stopped.
    Loop,
    /// Stop a looping cue.
    StopLoop,
}

/// One cue with its playback operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CueRequest {
    pub cue: Cue,
    pub op: CueOp,
}

impl CueRequest {
    pub fn play(cue: Cue) -> Self {
        Self { cue, op: CueOp::Play }
    }

    pub fn stop(cue: Cue) -> Self {
        Self { cue, op: CueOp::Stop }
    }

    pub fn looped(cue: Cue) -> Self {
        Self { cue, op: CueOp::Loop }
    }

    pub fn stop_loop(cue: Cue) -> Self {
        Self { cue, op: CueOp::StopLoop }
    }
}
