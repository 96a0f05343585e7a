//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate
//! so other layers can stay focused on orchestration or the worker.

pub mod errors;
pub mod events;
pub mod handle;
pub mod ports;

pub use errors::{Result, RuntimeError};
pub use events::GameEvent;
pub use handle::SessionHandle;
pub use ports::{AudioCues, NullAudio, NullRenderer, WheelRenderer};
