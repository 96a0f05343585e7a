//! Cloneable façade for issuing commands to a running session.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for
//! sending player input and reading state snapshots.

use tokio::sync::{broadcast, mpsc, oneshot};

use jontune_core::{GameState, PlayerAction};

use super::errors::{Result, RuntimeError};
use super::events::GameEvent;
use crate::workers::Command;

/// Client-facing handle to interact with a session.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl SessionHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Send a player action and wait for the engine's verdict.
    pub async fn player(&self, action: PlayerAction) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::Player {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Begin charging spin power (player pressed and holds the control).
    pub async fn start_charge(&self) -> Result<()> {
        self.command_tx
            .send(Command::StartCharge)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Release the spin control, converting the charge into a spin.
    pub async fn end_charge(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::EndCharge { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Abort an in-progress charge, e.g. when the window loses focus.
    pub async fn cancel_charge(&self) -> Result<()> {
        self.command_tx
            .send(Command::CancelCharge)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Query the current game state (read-only snapshot).
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }

    /// Ask the worker to stop. Used by [`crate::Session::shutdown`].
    pub(crate) async fn send_shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
