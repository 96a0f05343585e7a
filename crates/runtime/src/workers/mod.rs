//! Background tasks internal to the runtime crate.

mod session;

pub(crate) use session::{Command, SessionWorker};
