//! Per-connection handler: registration, join routing and broadcast delivery.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! The flow is:
//!   1. Register with the coordinator → start receiving broadcasts
//!   2. Spawn a writer task that encodes broadcasts onto the socket
//!   3. Loop: receive frames → forward `join_game` to the coordinator
//!   4. On close, the guard reports the disconnect

use std::sync::Arc;

use luckdraw_protocol::{ClientEvent, Codec, PlayerId, ServerEvent};
use luckdraw_session::CoordinatorHandle;
use luckdraw_transport::{Connection, TransportError, WebSocketConnection};
use tokio::sync::mpsc;

use crate::LuckdrawError;
use crate::server::ServerState;

/// Drop guard that reports the disconnect when the handler exits.
///
/// Runs even if the handler panics. `Drop` is synchronous, so the report
/// goes out on a fire-and-forget task.
struct ConnectionGuard {
    player_id: PlayerId,
    coordinator: CoordinatorHandle,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        let player_id = self.player_id;
        let coordinator = self.coordinator.clone();
        tokio::spawn(async move {
            let _ = coordinator.disconnect(player_id).await;
        });
    }
}

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection<C: Codec>(
    conn: WebSocketConnection,
    state: Arc<ServerState<C>>,
) -> Result<(), LuckdrawError> {
    let conn = Arc::new(conn);
    let conn_id = conn.id();
    let player_id = PlayerId::from(conn_id);
    tracing::info!(%conn_id, %player_id, "client connected");

    let (tx, rx) = mpsc::unbounded_channel();
    state.coordinator.connect(player_id, tx).await?;
    let _guard = ConnectionGuard {
        player_id,
        coordinator: state.coordinator.clone(),
    };

    let writer = tokio::spawn(write_loop(Arc::clone(&conn), Arc::clone(&state), rx));
    let result = read_loop(&conn, &state, player_id).await;
    writer.abort();

    tracing::info!(%player_id, "client disconnected");
    // _guard drops here → coordinator disconnect fires.
    result
}

/// Reads inbound frames until the socket closes.
async fn read_loop<C: Codec>(
    conn: &WebSocketConnection,
    state: &ServerState<C>,
    player_id: PlayerId,
) -> Result<(), LuckdrawError> {
    loop {
        let frame = match conn.recv().await {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                tracing::debug!(%player_id, "connection closed cleanly");
                return Ok(());
            }
            Err(TransportError::InvalidUtf8) => {
                tracing::debug!(%player_id, "ignoring non-UTF-8 frame");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let event: ClientEvent = match state.codec.decode(&frame) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(%player_id, error = %e, "ignoring undecodable frame");
                continue;
            }
        };

        match event {
            ClientEvent::JoinGame(username) => {
                tracing::debug!(%player_id, %username, "join_game received");
                state.coordinator.join(player_id, username).await?;
            }
        }
    }
}

/// Encodes broadcasts and writes them to the socket, in order.
async fn write_loop<C: Codec>(
    conn: Arc<WebSocketConnection>,
    state: Arc<ServerState<C>>,
    mut rx: mpsc::UnboundedReceiver<ServerEvent>,
) {
    while let Some(event) = rx.recv().await {
        let frame = match state.codec.encode(&event) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!(event = event.name(), error = %e, "failed to encode event");
                continue;
            }
        };
        if let Err(e) = conn.send(&frame).await {
            tracing::debug!(conn_id = %conn.id(), error = %e, "send failed, stopping writer");
            break;
        }
    }
}
