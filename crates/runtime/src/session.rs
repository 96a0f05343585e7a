//! Session orchestrator.
//!
//! [`SessionBuilder`] assembles content, configuration, and presentation
//! ports, spawns the worker task, and hands back a [`Session`] that owns
//! the worker plus a cloneable [`SessionHandle`] for input.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

use jontune_content::{PuzzleSet, fallback_puzzles, standard_wheel};
use jontune_core::{EngineConfig, WedgeSet};

use crate::api::{
    AudioCues, GameEvent, NullAudio, NullRenderer, Result, RuntimeError, SessionHandle,
    WheelRenderer,
};
use crate::setup::SessionSetup;
use crate::workers::SessionWorker;

/// Runtime tuning for a session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Rule constants handed to the engine.
    pub engine: EngineConfig,
    /// Broadcast buffer; slow subscribers lag past this many events.
    pub event_buffer_size: usize,
    /// Command channel depth between handles and the worker.
    pub command_buffer_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// A running game session.
///
/// Dropping the session does not stop the worker while handles remain;
/// call [`Session::shutdown`] to stop it deterministically.
pub struct Session {
    handle: SessionHandle,
    worker: JoinHandle<()>,
}

impl Session {
    pub fn builder(setup: SessionSetup) -> SessionBuilder {
        SessionBuilder::new(setup)
    }

    /// A cloneable handle for sending input and querying state.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe_events()
    }

    /// Stop the worker and wait for it to finish.
    pub async fn shutdown(self) -> Result<()> {
        self.handle.send_shutdown().await?;
        self.worker.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Session`].
///
/// Everything except the setup has a default: built-in puzzles, the
/// standard wheel, null presentation ports, and a random seed.
pub struct SessionBuilder {
    config: SessionConfig,
    setup: SessionSetup,
    puzzles: Option<PuzzleSet>,
    wheel: Option<WedgeSet>,
    seed: Option<u64>,
    renderer: Arc<dyn WheelRenderer>,
    audio: Arc<dyn AudioCues>,
}

impl SessionBuilder {
    fn new(setup: SessionSetup) -> Self {
        Self {
            config: SessionConfig::default(),
            setup,
            puzzles: None,
            wheel: None,
            seed: None,
            renderer: Arc::new(NullRenderer),
            audio: Arc::new(NullAudio),
        }
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn puzzles(mut self, puzzles: PuzzleSet) -> Self {
        self.puzzles = Some(puzzles);
        self
    }

    pub fn wheel(mut self, wheel: WedgeSet) -> Self {
        self.wheel = Some(wheel);
        self
    }

    /// Fix the session seed. Useful for replays and tests.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn WheelRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn audio(mut self, audio: Arc<dyn AudioCues>) -> Self {
        self.audio = audio;
        self
    }

    /// Validate the setup, build the initial state, and spawn the worker.
    ///
    /// Must be called inside a tokio runtime.
    pub fn build(self) -> Result<Session> {
        let puzzles = self.puzzles.unwrap_or_else(|| PuzzleSet {
            main: fallback_puzzles(),
            bonus: fallback_puzzles(),
        });
        if puzzles.main.is_empty() {
            return Err(RuntimeError::NoPuzzles);
        }

        let wheel = self.wheel.unwrap_or_else(standard_wheel);
        let seed = self.seed.unwrap_or_else(rand::random);
        let state = self.setup.build_state(seed, puzzles, wheel);

        info!(
            target: "runtime::session",
            seed,
            teams = state.teams.len(),
            rounds = state.puzzles.len(),
            "session started"
        );

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);
        let (event_tx, _) = broadcast::channel(self.config.event_buffer_size);
        let worker = SessionWorker::new(
            state,
            self.config.engine,
            self.renderer,
            self.audio,
            command_rx,
            event_tx.clone(),
        );
        let worker = tokio::spawn(worker.run());
        let handle = SessionHandle::new(command_tx, event_tx);

        Ok(Session { handle, worker })
    }
}
