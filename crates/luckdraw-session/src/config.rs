//! Session configuration and phase state machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Constants fixed when the coordinator is spawned.
///
/// None of these can change while the coordinator runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Scored rounds per session.
    pub total_rounds: u32,

    /// Roster size that auto-starts a session from the lobby.
    pub min_players: usize,

    /// Time between a round starting and its outcome being drawn.
    pub resolve_delay: Duration,

    /// Seed for the winner draw. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            total_rounds: 5,
            min_players: 4,
            resolve_delay: Duration::from_secs(3),
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    /// Clamps values the state machine cannot run with.
    ///
    /// - `total_rounds` and `min_players` are raised to at least 1.
    pub fn validated(mut self) -> Self {
        if self.total_rounds == 0 {
            tracing::warn!("total_rounds is 0, clamping to 1");
            self.total_rounds = 1;
        }
        if self.min_players == 0 {
            tracing::warn!("min_players is 0, clamping to 1");
            self.min_players = 1;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Where the session is in its lifecycle.
///
/// ```text
///            join reaches min_players
///   Lobby ───────────────────────────→ RoundActive ←──────────┐
///     ↑                                    │ resolve delay    │ rounds left
///     │                                    ↓                  │
///     └──────── Finished ←──────────── RoundResolved ─────────┘
///      reset              last round
/// ```
///
/// `RoundResolved` and `Finished` are transient: the coordinator passes
/// through them inside a single resolution step, so an outside observer
/// only ever sees `Lobby` or `RoundActive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Lobby,
    RoundActive,
    RoundResolved,
    Finished,
}

impl Phase {
    /// Returns `true` between auto-start and the final results.
    pub fn is_in_game(&self) -> bool {
        matches!(self, Self::RoundActive | Self::RoundResolved)
    }

    /// Returns `true` if moving to `target` is a legal transition.
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Lobby, Self::RoundActive)
                | (Self::RoundActive, Self::RoundResolved)
                | (Self::RoundResolved, Self::RoundActive)
                | (Self::RoundResolved, Self::Finished)
                | (Self::Finished, Self::Lobby)
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lobby => write!(f, "Lobby"),
            Self::RoundActive => write!(f, "RoundActive"),
            Self::RoundResolved => write!(f, "RoundResolved"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_legal_transitions() {
        assert!(Phase::Lobby.can_transition_to(Phase::RoundActive));
        assert!(Phase::RoundActive.can_transition_to(Phase::RoundResolved));
        assert!(Phase::RoundResolved.can_transition_to(Phase::RoundActive));
        assert!(Phase::RoundResolved.can_transition_to(Phase::Finished));
        assert!(Phase::Finished.can_transition_to(Phase::Lobby));
    }

    #[test]
    fn test_phase_illegal_transitions() {
        assert!(!Phase::Lobby.can_transition_to(Phase::Finished));
        assert!(!Phase::Lobby.can_transition_to(Phase::Lobby));
        assert!(!Phase::RoundActive.can_transition_to(Phase::Lobby));
        assert!(!Phase::RoundActive.can_transition_to(Phase::RoundActive));
        assert!(!Phase::Finished.can_transition_to(Phase::RoundActive));
    }

    #[test]
    fn test_phase_is_in_game() {
        assert!(!Phase::Lobby.is_in_game());
        assert!(Phase::RoundActive.is_in_game());
        assert!(Phase::RoundResolved.is_in_game());
        assert!(!Phase::Finished.is_in_game());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Lobby.to_string(), "Lobby");
        assert_eq!(Phase::RoundActive.to_string(), "RoundActive");
    }

    #[test]
    fn test_session_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.total_rounds, 5);
        assert_eq!(config.min_players, 4);
        assert_eq!(config.resolve_delay, Duration::from_secs(3));
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_session_config_validated_clamps_zeroes() {
        let config = SessionConfig {
            total_rounds: 0,
            min_players: 0,
            ..SessionConfig::default()
        }
        .validated();
        assert_eq!(config.total_rounds, 1);
        assert_eq!(config.min_players, 1);
    }

    #[test]
    fn test_session_config_validated_keeps_good_values() {
        let config = SessionConfig {
            total_rounds: 2,
            min_players: 3,
            ..SessionConfig::default()
        };
        assert_eq!(config.clone().validated(), config);
    }
}
