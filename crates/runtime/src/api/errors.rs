//! Unified error types surfaced by the runtime API.

use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("action rejected: {0}")]
    Engine(#[from] jontune_core::ExecuteError),

    #[error("a game needs at least one main-round puzzle")]
    NoPuzzles,
}
