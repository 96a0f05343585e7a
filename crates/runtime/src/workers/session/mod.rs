//! Session worker that owns the authoritative [`jontune_core::GameState`].
//!
//! Receives commands from [`crate::SessionHandle`], executes actions via
//! [`jontune_core::GameEngine`], fires scheduled system steps when their
//! deadline passes, and publishes [`GameEvent`] notifications.
//!
//! Ordering rule for the timers: the select loop is biased toward the
//! command channel, so a player action enqueued before a deadline fires
//! always wins the race. A bonus solve that arrives "at" the final
//! countdown tick is therefore resolved as a solve, never as a timeout.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{Instant, sleep, sleep_until};
use tracing::debug;

use jontune_core::action::SpinAction;
use jontune_core::{
    Action, Cue, CueOp, CueRequest, EngineConfig, ExecuteError, GameEngine, GameEnv, GamePhase,
    GameState, MainStep, PcgRng, PlayerAction,
};

use crate::api::{AudioCues, GameEvent, Result, RuntimeError, WheelRenderer};

/// Interval of the hold-to-spin power ticker.
const CHARGE_TICK: Duration = Duration::from_millis(16);

/// Commands that can be sent to the session worker.
pub enum Command {
    /// Execute a player action.
    Player {
        action: PlayerAction,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Player pressed and holds the spin control.
    StartCharge,
    /// Player released the spin control; the charge becomes a spin.
    EndCharge { reply: oneshot::Sender<Result<()>> },
    /// Charge aborted (release outside the control, focus loss).
    CancelCharge,
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Stop the worker loop.
    Shutdown,
}

/// Power accumulation while the spin control is held.
///
/// The power bounces between 0 and 100 so holding longer is not strictly
/// better; release timing is the skill element.
struct ChargeState {
    power: u8,
    rising: bool,
}

/// Background task that processes session commands and timers.
pub struct SessionWorker {
    state: GameState,
    config: EngineConfig,
    rng: PcgRng,
    renderer: Arc<dyn WheelRenderer>,
    audio: Arc<dyn AudioCues>,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
    /// When the currently scheduled system step should fire.
    deadline: Option<Instant>,
    charge: Option<ChargeState>,
}

impl SessionWorker {
    pub fn new(
        state: GameState,
        config: EngineConfig,
        renderer: Arc<dyn WheelRenderer>,
        audio: Arc<dyn AudioCues>,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        let deadline = state
            .pending
            .map(|p| Instant::now() + Duration::from_millis(p.delay_ms));
        Self {
            state,
            config,
            rng: PcgRng,
            renderer,
            audio,
            command_rx,
            event_tx,
            deadline,
            charge: None,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            let step_deadline = self
                .deadline
                .unwrap_or_else(|| Instant::now() + Duration::from_secs(86_400));

            tokio::select! {
                biased;
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(Command::Shutdown) | None => break,
                        Some(cmd) => self.handle_command(cmd),
                    }
                }
                _ = sleep_until(step_deadline), if self.deadline.is_some() => {
                    self.fire_scheduled_step();
                }
                _ = sleep(CHARGE_TICK), if self.charge.is_some() => {
                    self.tick_charge();
                }
            }
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Player { action, reply } => {
                let result = self.execute_player(action);
                let _ = reply.send(result);
            }
            Command::StartCharge => self.start_charge(),
            Command::EndCharge { reply } => {
                let result = self.end_charge();
                let _ = reply.send(result);
            }
            Command::CancelCharge => self.cancel_charge(),
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
            // Handled by the run loop before dispatch.
            Command::Shutdown => {}
        }
    }

    fn execute_player(&mut self, action: PlayerAction) -> Result<()> {
        let action = Action::Player(action);
        match self.execute(action.clone()) {
            Ok(()) => Ok(()),
            Err(error) => {
                debug!(
                    target: "runtime::worker",
                    action = ?action,
                    error = %error,
                    "player action rejected"
                );
                // Invalid input gets audible feedback, never a crash.
                self.audio.play(Cue::Buzzer);
                let _ = self.event_tx.send(GameEvent::ActionRejected {
                    action,
                    reason: error.to_string(),
                });
                Err(RuntimeError::Engine(error))
            }
        }
    }

    /// Fire the scheduled system step whose deadline just passed.
    ///
    /// A rejection here is normal: a player action processed between the
    /// deadline and this call may have consumed or replaced the schedule.
    fn fire_scheduled_step(&mut self) {
        self.deadline = None;
        let Some(pending) = self.state.pending else {
            return;
        };
        if let Err(error) = self.execute(Action::system(pending.step)) {
            debug!(
                target: "runtime::worker",
                step = %pending.step,
                error = %error,
                "scheduled step rejected"
            );
        }
    }

    fn execute(&mut self, action: Action) -> std::result::Result<(), ExecuteError> {
        let phase_before = self.state.phase;
        let rotation_before = self.state.wheel.rotation;

        let env = GameEnv::new(&self.config, &self.rng);
        let outcome = GameEngine::new(&mut self.state).execute(env, &action)?;

        for request in &outcome.cues {
            self.dispatch_cue(*request);
            let _ = self.event_tx.send(GameEvent::Cue(*request));
        }
        if self.state.wheel.rotation != rotation_before {
            self.renderer
                .draw_wedges(&self.state.wheel.set, self.state.wheel.rotation);
            let _ = self.event_tx.send(GameEvent::WheelMoved {
                rotation: self.state.wheel.rotation,
            });
        }
        if self.state.phase != phase_before {
            let _ = self.event_tx.send(GameEvent::PhaseChanged {
                phase: self.state.phase,
            });
        }
        let _ = self.event_tx.send(GameEvent::ActionApplied {
            action,
            phase: self.state.phase,
        });

        // The engine replaced or cleared the schedule; mirror it.
        self.deadline = self
            .state
            .pending
            .map(|p| Instant::now() + Duration::from_millis(p.delay_ms));
        Ok(())
    }

    fn dispatch_cue(&self, request: CueRequest) {
        match request.op {
            CueOp::Play => self.audio.play(request.cue),
            CueOp::Stop => self.audio.stop(request.cue),
            CueOp::Loop => self.audio.play_loop(request.cue),
            CueOp::StopLoop => self.audio.stop_loop(request.cue),
        }
    }

    fn start_charge(&mut self) {
        // Charging only makes sense when a spin would be legal.
        if self.charge.is_some() || self.state.phase != GamePhase::Main(MainStep::Idle) {
            return;
        }
        self.charge = Some(ChargeState {
            power: 0,
            rising: true,
        });
        self.audio.play_loop(Cue::ChargeUp);
    }

    fn tick_charge(&mut self) {
        let Some(charge) = self.charge.as_mut() else {
            return;
        };
        if charge.rising {
            charge.power = (charge.power + 2).min(100);
            if charge.power == 100 {
                charge.rising = false;
            }
        } else {
            charge.power = charge.power.saturating_sub(2);
            if charge.power == 0 {
                charge.rising = true;
            }
        }
        let power = charge.power;
        let _ = self.event_tx.send(GameEvent::ChargeTick { power });
    }

    fn end_charge(&mut self) -> Result<()> {
        let Some(charge) = self.charge.take() else {
            // Release without a hold (e.g. after a focus-loss cancel).
            return Ok(());
        };
        self.audio.stop_loop(Cue::ChargeUp);
        self.execute_player(PlayerAction::Spin(SpinAction {
            power: charge.power.max(1),
        }))
    }

    fn cancel_charge(&mut self) {
        if self.charge.take().is_some() {
            self.audio.stop_loop(Cue::ChargeUp);
        }
    }
}
