//! Player identity and the per-player record every client renders.

use std::fmt;

use luckdraw_transport::ConnectionId;
use serde::{Deserialize, Serialize};

/// A unique identifier for a player.
///
/// A player has no identity beyond the connection it joined from, so a
/// `PlayerId` is always derived from the transport's [`ConnectionId`]. The
/// newtype keeps the two apart in signatures: the coordinator deals in
/// players, the transport in connections.
///
/// `#[serde(transparent)]` puts it on the wire as a bare number:
/// `PlayerId(42)` becomes `42`, not `{"0":42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

impl From<ConnectionId> for PlayerId {
    fn from(id: ConnectionId) -> Self {
        Self(id.into_inner())
    }
}

/// One joined player as broadcast to clients.
///
/// Serializes as `{"id": 3, "username": "Ann", "score": 0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable handle, assigned at connect time.
    pub id: PlayerId,
    /// Display name chosen at join. Not unique.
    pub username: String,
    /// Rounds won in the current session.
    pub score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(id: PlayerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            score: 0,
        }
    }
}
