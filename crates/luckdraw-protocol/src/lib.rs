//! Wire protocol for Luckdraw.
//!
//! This crate defines what travels over a connection:
//!
//! - **Types** ([`Player`], [`PlayerId`]): the data every client renders.
//! - **Events** ([`ClientEvent`], [`ServerEvent`]): named events, each a
//!   JSON object of the form `{"event": "<name>", "data": <payload>}`.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how events become text
//!   frames and back.
//! - **Errors** ([`ProtocolError`]): what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (text frames) and the session
//! coordinator (roster and rounds). It doesn't know about connections or
//! timers. It only knows how to serialize and deserialize events.
//!
//! ```text
//! Transport (frames) → Protocol (events) → Session coordinator
//! ```

mod codec;
mod error;
mod events;
mod player;

pub use codec::{Codec, MAX_FRAME_LEN};
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use events::{ClientEvent, ServerEvent};
pub use player::{Player, PlayerId};
