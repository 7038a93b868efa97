//! # Luckdraw
//!
//! A lobby-and-rounds lucky draw game server for browser clients.
//!
//! Clients connect over WebSocket and send a single `join_game` event with
//! a display name. Once enough players have joined, the session starts by
//! itself: a fixed number of rounds each draw one random winner, the final
//! standings are broadcast, and the lobby opens again for the same group.
//!
//! The crate wires the layers together:
//! transport → protocol → session coordinator.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use luckdraw::prelude::*;
//!
//! # async fn run() -> Result<(), LuckdrawError> {
//! let server = LuckdrawServer::builder()
//!     .bind("0.0.0.0:8080")
//!     .session_config(SessionConfig::default())
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod handler;
mod server;

pub use error::LuckdrawError;
pub use server::{LuckdrawServer, LuckdrawServerBuilder};

/// Everything needed to embed or test a server.
pub mod prelude {
    pub use crate::{LuckdrawError, LuckdrawServer, LuckdrawServerBuilder};
    pub use luckdraw_protocol::{ClientEvent, Codec, JsonCodec, Player, PlayerId, ServerEvent};
    pub use luckdraw_session::{CoordinatorHandle, Phase, SessionConfig, SessionInfo};
}
