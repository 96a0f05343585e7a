//! Runtime orchestration for the deterministic game engine.
//!
//! This crate wires the engine, the content loaders, and the presentation
//! ports into a running session. Consumers embed [`Session`] to start a
//! game, send player input through [`SessionHandle`], and subscribe to
//! events; the worker task owns the state and fires scheduled steps.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`setup`] validates and clamps game setup into an initial state
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod session;
pub mod setup;

mod workers;

pub use api::{
    AudioCues, GameEvent, NullAudio, NullRenderer, Result, RuntimeError, SessionHandle,
    WheelRenderer,
};
pub use session::{Session, SessionBuilder, SessionConfig};
pub use setup::SessionSetup;
