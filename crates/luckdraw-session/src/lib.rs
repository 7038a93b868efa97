//! Session coordinator for Luckdraw.
//!
//! Owns the one shared session: who has joined, which round is running,
//! and what everyone scored. Players join a lobby, the session starts by
//! itself once enough of them are in, a fixed number of rounds each draw
//! one random winner, and the final standings go out before the session
//! resets for the next group.
//!
//! # Key types
//!
//! - [`Session`]: the pure state machine; every operation returns a [`Step`]
//! - [`spawn_coordinator`] / [`CoordinatorHandle`]: the actor that owns a
//!   `Session`, broadcasts its events and drives the round timer
//! - [`Phase`]: lifecycle state
//! - [`SessionConfig`]: rounds, start threshold, resolution delay
//! - [`pick_winner`], [`leaders`]: round and game outcomes

mod config;
mod coordinator;
mod error;
mod outcome;
mod session;

pub use config::{Phase, SessionConfig};
pub use coordinator::{
    ClientSender, CoordinatorHandle, DEFAULT_CHANNEL_SIZE, SessionInfo, spawn_coordinator,
    spawn_coordinator_with_capacity,
};
pub use error::SessionError;
pub use outcome::{leaders, pick_winner};
pub use session::{RoundToken, Session, Step};
