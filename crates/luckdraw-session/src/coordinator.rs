//! Coordinator actor: a single Tokio task that owns the [`Session`].
//!
//! Every roster mutation, phase transition and broadcast happens on this
//! task, one command at a time, so no two steps ever interleave. The round
//! delay is a [`PhaseTimer`] polled in the same `select!` loop as the
//! command channel: joins and leaves keep flowing while a round is pending,
//! and the resolution runs on the actor like any other step.

use std::collections::HashMap;

use luckdraw_protocol::{Player, PlayerId, ServerEvent};
use luckdraw_timer::PhaseTimer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};

use crate::session::{RoundToken, Session, Step};
use crate::{Phase, SessionConfig, SessionError};

/// Default command channel size for the coordinator.
pub const DEFAULT_CHANNEL_SIZE: usize = 256;

/// Channel sender for delivering broadcasts to one connection.
pub type ClientSender = mpsc::UnboundedSender<ServerEvent>;

/// Commands sent to the coordinator through its channel.
pub(crate) enum Command {
    /// Start receiving broadcasts. Does not join the roster.
    Connect {
        player_id: PlayerId,
        sender: ClientSender,
    },

    /// Join the roster.
    Join {
        player_id: PlayerId,
        username: String,
    },

    /// The connection is gone: stop broadcasting to it and leave the roster.
    Disconnect { player_id: PlayerId },

    /// Request a snapshot of the session.
    GetInfo { reply: oneshot::Sender<SessionInfo> },

    /// Stop the actor.
    Shutdown,
}

/// A point-in-time snapshot of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub phase: Phase,
    pub current_round: u32,
    pub total_rounds: u32,
    pub min_players: usize,
    /// Roster in join order.
    pub players: Vec<Player>,
    /// Connections receiving broadcasts, joined or not.
    pub connections: usize,
    /// Whether a round resolution is scheduled.
    pub round_pending: bool,
}

/// Handle to the running coordinator.
///
/// Cheap to clone: every connection handler holds one.
#[derive(Clone)]
pub struct CoordinatorHandle {
    sender: mpsc::Sender<Command>,
}

impl CoordinatorHandle {
    /// Registers a connection for broadcasts.
    pub async fn connect(
        &self,
        player_id: PlayerId,
        sender: ClientSender,
    ) -> Result<(), SessionError> {
        self.send(Command::Connect { player_id, sender }).await
    }

    /// Asks to join the roster. Blank names and repeat joins are dropped
    /// by the coordinator without a reply.
    pub async fn join(
        &self,
        player_id: PlayerId,
        username: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.send(Command::Join {
            player_id,
            username: username.into(),
        })
        .await
    }

    /// Reports a closed connection. The player leaves the roster if it
    /// had joined.
    pub async fn disconnect(&self, player_id: PlayerId) -> Result<(), SessionError> {
        self.send(Command::Disconnect { player_id }).await
    }

    /// Requests a snapshot of the session.
    pub async fn info(&self) -> Result<SessionInfo, SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::GetInfo { reply: reply_tx }).await?;
        reply_rx.await.map_err(|_| SessionError::Unavailable)
    }

    /// Tells the coordinator to stop.
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.send(Command::Shutdown).await
    }

    /// Returns `true` once the actor has stopped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    async fn send(&self, cmd: Command) -> Result<(), SessionError> {
        self.sender
            .send(cmd)
            .await
            .map_err(|_| SessionError::Unavailable)
    }
}

/// The actor's private state. Runs inside a Tokio task.
struct Coordinator {
    session: Session,
    timer: PhaseTimer<RoundToken>,
    rng: StdRng,
    /// Per-connection outbound channels.
    clients: HashMap<PlayerId, ClientSender>,
    receiver: mpsc::Receiver<Command>,
}

impl Coordinator {
    /// Runs the actor loop until shutdown or until every handle is gone.
    async fn run(mut self) {
        tracing::info!(
            min_players = self.session.config().min_players,
            total_rounds = self.session.config().total_rounds,
            resolve_delay_ms = self.session.config().resolve_delay.as_millis() as u64,
            "session coordinator started"
        );

        loop {
            tokio::select! {
                cmd = self.receiver.recv() => {
                    let Some(cmd) = cmd else { break };
                    if !self.handle_command(cmd) {
                        break;
                    }
                }
                token = self.timer.expired() => {
                    let step = self.session.resolve_round(token, &mut self.rng);
                    self.apply(step);
                }
            }
        }

        tracing::info!("session coordinator stopped");
    }

    /// Handles one command. Returns `false` to stop the actor.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Connect { player_id, sender } => {
                self.clients.insert(player_id, sender);
                tracing::debug!(
                    %player_id,
                    connections = self.clients.len(),
                    "connection registered"
                );
            }
            Command::Join {
                player_id,
                username,
            } => {
                let step = self.session.join(player_id, &username);
                self.apply(step);
            }
            Command::Disconnect { player_id } => {
                self.clients.remove(&player_id);
                let step = self.session.leave(player_id);
                self.apply(step);
            }
            Command::GetInfo { reply } => {
                let _ = reply.send(self.info());
            }
            Command::Shutdown => {
                tracing::info!("session coordinator shutting down");
                return false;
            }
        }
        true
    }

    /// Broadcasts a step's events and arms the timer for a new round.
    fn apply(&mut self, step: Step) {
        for event in &step.events {
            self.broadcast(event);
        }

        if let Some(token) = step.schedule {
            let delay = self.session.config().resolve_delay;
            if let Err(rejected) = self.timer.arm(delay, token) {
                // The session only schedules from RoundActive entry, which
                // requires the previous token to have fired.
                tracing::error!(
                    ?rejected,
                    pending = ?self.timer.token(),
                    "round scheduled while another is in flight"
                );
            }
        }
    }

    /// Sends an event to every registered connection. Silently skips
    /// connections whose receiver is gone; their disconnect follows.
    fn broadcast(&self, event: &ServerEvent) {
        tracing::debug!(
            event = event.name(),
            recipients = self.clients.len(),
            "broadcast"
        );
        for sender in self.clients.values() {
            let _ = sender.send(event.clone());
        }
    }

    fn info(&self) -> SessionInfo {
        SessionInfo {
            phase: self.session.phase(),
            current_round: self.session.current_round(),
            total_rounds: self.session.config().total_rounds,
            min_players: self.session.config().min_players,
            players: self.session.players().to_vec(),
            connections: self.clients.len(),
            round_pending: self.timer.is_armed(),
        }
    }
}

/// Spawns the coordinator task and returns a handle to it.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_coordinator(config: SessionConfig) -> CoordinatorHandle {
    spawn_coordinator_with_capacity(config, DEFAULT_CHANNEL_SIZE)
}

/// Like [`spawn_coordinator`] with an explicit command channel size.
///
/// `channel_size` controls backpressure: if the channel fills up,
/// senders wait (bounded channel).
pub fn spawn_coordinator_with_capacity(
    config: SessionConfig,
    channel_size: usize,
) -> CoordinatorHandle {
    let (tx, rx) = mpsc::channel(channel_size);

    let rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let actor = Coordinator {
        session: Session::new(config),
        timer: PhaseTimer::new(),
        rng,
        clients: HashMap::new(),
        receiver: rx,
    };

    tokio::spawn(actor.run());

    CoordinatorHandle { sender: tx }
}
