//! Round and game outcomes.
//!
//! Both are pure functions over a roster snapshot so they can be tested
//! without a running coordinator. The random source is injected; the
//! coordinator passes its `StdRng`, tests pass a seeded one.

use luckdraw_protocol::{Player, PlayerId};
use rand::Rng;

/// Draws one round winner uniformly from `eligible`.
///
/// Returns `None` when nobody is eligible (every entrant left mid-round).
pub fn pick_winner<R: Rng + ?Sized>(eligible: &[PlayerId], rng: &mut R) -> Option<PlayerId> {
    if eligible.is_empty() {
        return None;
    }
    let index = rng.random_range(0..eligible.len());
    Some(eligible[index])
}

/// Every player tied at the top score, in roster order.
///
/// Ties are not broken. An empty roster has no leaders.
pub fn leaders(players: &[Player]) -> Vec<Player> {
    let Some(top) = players.iter().map(|p| p.score).max() else {
        return Vec::new();
    };
    players.iter().filter(|p| p.score == top).cloned().collect()
}
