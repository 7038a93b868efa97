//! Error types for the session layer.

/// Errors that can occur when talking to the coordinator.
///
/// Domain conditions (blank usernames, unknown connections, rounds with
/// nobody eligible) are not errors: the coordinator absorbs them. The only
/// failure a caller can see is the coordinator itself being gone.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The coordinator's command channel is closed, or it dropped a reply.
    #[error("session coordinator is unavailable")]
    Unavailable,
}
