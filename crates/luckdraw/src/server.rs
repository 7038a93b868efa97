//! `LuckdrawServer` builder and accept loop.
//!
//! Ties together all the layers: transport → protocol → session.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use luckdraw_protocol::{Codec, JsonCodec};
use luckdraw_session::{CoordinatorHandle, SessionConfig, spawn_coordinator};
use luckdraw_transport::{Transport, WebSocketTransport};

use crate::LuckdrawError;
use crate::handler::handle_connection;

/// Shared server state passed to each connection handler task.
pub(crate) struct ServerState<C: Codec> {
    pub(crate) coordinator: CoordinatorHandle,
    pub(crate) codec: C,
}

/// Builder for configuring and starting a Luckdraw server.
///
/// # Example
///
/// ```rust,ignore
/// let server = LuckdrawServer::builder()
///     .bind("0.0.0.0:8080")
///     .session_config(SessionConfig { min_players: 2, ..Default::default() })
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct LuckdrawServerBuilder {
    bind_addr: String,
    session_config: SessionConfig,
}

impl LuckdrawServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            session_config: SessionConfig::default(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the session constants (rounds, start threshold, delay).
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Binds the listener and spawns the session coordinator.
    ///
    /// Uses `JsonCodec` and `WebSocketTransport`.
    pub async fn build(self) -> Result<LuckdrawServer<JsonCodec>, LuckdrawError> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;
        let coordinator = spawn_coordinator(self.session_config);

        let state = Arc::new(ServerState {
            coordinator,
            codec: JsonCodec,
        });

        Ok(LuckdrawServer { transport, state })
    }
}

impl Default for LuckdrawServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Luckdraw server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct LuckdrawServer<C: Codec = JsonCodec> {
    transport: WebSocketTransport,
    state: Arc<ServerState<C>>,
}

impl LuckdrawServer<JsonCodec> {
    /// Creates a new builder.
    pub fn builder() -> LuckdrawServerBuilder {
        LuckdrawServerBuilder::new()
    }
}

impl<C: Codec> LuckdrawServer<C> {
    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.transport.local_addr()
    }

    /// A handle to the session coordinator, e.g. for inspecting state.
    pub fn coordinator(&self) -> CoordinatorHandle {
        self.state.coordinator.clone()
    }

    /// Runs the accept loop until the process is terminated.
    pub async fn run(self) -> Result<(), LuckdrawError> {
        self.run_until(std::future::pending()).await
    }

    /// Runs the accept loop until `shutdown` completes, then stops the
    /// coordinator.
    ///
    /// Each accepted connection gets its own handler task.
    pub async fn run_until(
        mut self,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), LuckdrawError> {
        tracing::info!(addr = ?self.transport.local_addr().ok(), "Luckdraw server running");
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    tracing::info!("shutdown requested");
                    break;
                }
                accepted = self.transport.accept() => match accepted {
                    Ok(conn) => {
                        let state = Arc::clone(&self.state);
                        tokio::spawn(async move {
                            if let Err(e) = handle_connection(conn, state).await {
                                tracing::debug!(
                                    error = %e,
                                    "connection ended with error"
                                );
                            }
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "accept failed");
                    }
                },
            }
        }

        self.transport.shutdown().await?;
        self.state.coordinator.shutdown().await?;
        tracing::info!("Luckdraw server stopped");
        Ok(())
    }
}
