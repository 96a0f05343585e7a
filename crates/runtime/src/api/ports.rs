//! Presentation ports consumed by the session worker.
//!
//! Both ports are fire-and-forget: implementations swallow their own
//! failures, because a broken speaker or canvas must never stall the game.

use jontune_core::{Cue, WedgeSet};

/// Draws the wheel face whenever rotation or layout changes.
pub trait WheelRenderer: Send + Sync {
    fn draw_wedges(&self, set: &WedgeSet, rotation: f64);
}

/// Plays named audio cues.
pub trait AudioCues: Send + Sync {
    fn play(&self, cue: Cue);
    fn stop(&self, cue: Cue);
    fn play_loop(&self, cue: Cue);
    fn stop_loop(&self, cue: Cue);
}

/// Renderer that draws nothing. Useful headless and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl WheelRenderer for NullRenderer {
    fn draw_wedges(&self, _set: &WedgeSet, _rotation: f64) {}
}

/// Audio sink that plays nothing. Useful headless and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioCues for NullAudio {
    fn play(&self, _cue: Cue) {}
    fn stop(&self, _cue: Cue) {}
    fn play_loop(&self, _cue: Cue) {}
    fn stop_loop(&self, _cue: Cue) {}
}
