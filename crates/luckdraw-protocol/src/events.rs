//! Named events exchanged with clients.
//!
//! Every frame is one JSON object with an `event` name and a `data`
//! payload. Serde's adjacent tagging produces exactly that shape:
//!
//! ```text
//! {"event": "join_game", "data": "Ann"}
//! {"event": "new_round", "data": {"currentRound": 2, "totalRounds": 5}}
//! ```
//!
//! Event names are snake_case, payload fields camelCase; that is the
//! contract browser clients are written against.

use serde::{Deserialize, Serialize};

use crate::{Player, PlayerId};

/// Events a client sends to the server.
///
/// Disconnects are not an event: the transport reports them when the
/// socket closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Enter the roster under the given display name.
    JoinGame(String),
}

/// Events the server broadcasts to every connected client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    /// The roster changed (join or leave).
    PlayerUpdate { players: Vec<Player> },

    /// The lobby filled up and a session began.
    GameStart { total_rounds: u32 },

    /// A round is underway; its outcome follows after the resolution delay.
    NewRound { current_round: u32, total_rounds: u32 },

    /// A round resolved. `winner_id`/`winner_username` are `null` when no
    /// player was eligible to win.
    RoundResult {
        round: u32,
        winner_id: Option<PlayerId>,
        winner_username: Option<String>,
        players: Vec<Player>,
    },

    /// The last round resolved. `winners` holds every player tied at the
    /// top score.
    GameOver {
        players: Vec<Player>,
        winners: Vec<Player>,
    },
}

impl ServerEvent {
    /// The wire name of this event, as it appears in the `event` field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlayerUpdate { .. } => "player_update",
            Self::GameStart { .. } => "game_start",
            Self::NewRound { .. } => "new_round",
            Self::RoundResult { .. } => "round_result",
            Self::GameOver { .. } => "game_over",
        }
    }
}
