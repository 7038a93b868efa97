//! Codec trait and implementations for turning events into text frames.
//!
//! The protocol layer doesn't care HOW events are serialized; it just
//! needs something that implements [`Codec`]. Browsers speak JSON, so
//! [`JsonCodec`] is the only implementation today.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Largest inbound frame, in bytes, a codec will attempt to decode.
///
/// The only inbound event carries a username, so anything bigger than a
/// few kilobytes is a misbehaving client.
pub const MAX_FRAME_LEN: usize = 4096;

/// A codec that can encode Rust types to text frames and decode them back.
///
/// `Send + Sync + 'static` because one codec instance is shared by every
/// connection task for the lifetime of the server.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into a text frame.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError>;

    /// Deserializes a text frame back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::FrameTooLarge` for frames over
    /// [`MAX_FRAME_LEN`], and `ProtocolError::Decode` if the frame is
    /// malformed or doesn't match the expected type.
    fn decode<T: DeserializeOwned>(&self, frame: &str) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use luckdraw_protocol::{ClientEvent, Codec, JsonCodec};
///
/// let codec = JsonCodec;
/// let event: ClientEvent = codec
///     .decode(r#"{"event":"join_game","data":"ann"}"#)
///     .unwrap();
/// assert_eq!(event, ClientEvent::JoinGame("ann".into()));
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError> {
        serde_json::to_string(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, frame: &str) -> Result<T, ProtocolError> {
        if frame.len() > MAX_FRAME_LEN {
            return Err(ProtocolError::FrameTooLarge {
                len: frame.len(),
                max: MAX_FRAME_LEN,
            });
        }
        serde_json::from_str(frame).map_err(ProtocolError::Decode)
    }
}
