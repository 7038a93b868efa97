//! Error types for the protocol layer.
//!
//! Each Luckdraw crate defines its own error enum, so a `ProtocolError`
//! always means a frame could not be turned into an event (or back), never
//! a networking or session problem.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning an event into a frame).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning a frame into an event).
    ///
    /// Common causes: malformed JSON, an unknown `event` name, or a
    /// payload of the wrong shape.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The inbound frame exceeds [`MAX_FRAME_LEN`](crate::MAX_FRAME_LEN).
    /// Rejected before parsing.
    #[error("frame of {len} bytes exceeds the {max} byte limit")]
    FrameTooLarge { len: usize, max: usize },
}
