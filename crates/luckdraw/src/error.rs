//! Unified error type for the Luckdraw server.

use luckdraw_protocol::ProtocolError;
use luckdraw_session::SessionError;
use luckdraw_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attributes let `?` convert sub-crate errors
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum LuckdrawError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The session coordinator is gone.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// An OS-level error outside the transport (address lookup, signals).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
