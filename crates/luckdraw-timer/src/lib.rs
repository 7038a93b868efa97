//! One-shot phase timer for Luckdraw.
//!
//! A [`PhaseTimer`] holds at most one pending deadline together with a
//! token identifying what the deadline is for. The session coordinator
//! arms it when a round starts and receives the token back when the round
//! is due to resolve.
//!
//! # Disarmed timers pend forever
//!
//! When nothing is armed, [`PhaseTimer::expired`] never resolves. That is
//! what lets the timer sit in an actor's `tokio::select!` loop next to the
//! command channel without a special case:
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         Some(cmd) = cmd_rx.recv() => { /* join, leave, ... */ }
//!         token = timer.expired() => { /* resolve the round */ }
//!     }
//! }
//! ```
//!
//! # No cancellation
//!
//! There is no `cancel`: once armed, a deadline always fires, and arming
//! while already armed is refused.

use std::time::Duration;

use tokio::time::{self, Instant};
use tracing::{debug, trace, warn};

/// A pending deadline and the token it will hand back.
#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    token: T,
}

/// Single-slot, token-carrying deadline timer.
///
/// Uses Tokio's clock, so tests can drive it with `tokio::time::pause()`.
#[derive(Debug)]
pub struct PhaseTimer<T> {
    pending: Option<Pending<T>>,
    fired: u64,
}

impl<T> Default for PhaseTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PhaseTimer<T> {
    /// Creates a disarmed timer.
    pub fn new() -> Self {
        Self {
            pending: None,
            fired: 0,
        }
    }

    /// Arms the timer to fire `delay` from now, carrying `token`.
    ///
    /// # Errors
    /// If a deadline is already pending the timer is left untouched and
    /// the rejected token is handed back.
    pub fn arm(&mut self, delay: Duration, token: T) -> Result<(), T> {
        if self.pending.is_some() {
            warn!(
                delay_ms = delay.as_millis() as u64,
                "phase timer already armed, refusing to re-arm"
            );
            return Err(token);
        }
        debug!(delay_ms = delay.as_millis() as u64, "phase timer armed");
        self.pending = Some(Pending {
            deadline: Instant::now() + delay,
            token,
        });
        Ok(())
    }

    /// Waits for the pending deadline and returns its token.
    ///
    /// Pends forever while disarmed. Cancel-safe: if the future is dropped
    /// before the deadline (another `select!` branch won), the deadline
    /// stays armed and a later call picks it up.
    pub async fn expired(&mut self) -> T {
        let deadline = match &self.pending {
            Some(pending) => pending.deadline,
            None => std::future::pending().await,
        };

        time::sleep_until(deadline).await;

        // Nothing between the sleep and here can await, so the slot is
        // still the one we slept on.
        let Some(pending) = self.pending.take() else {
            unreachable!("phase timer slot emptied while sleeping");
        };
        self.fired += 1;
        trace!(fired = self.fired, "phase timer fired");
        pending.token
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending deadline, or `None` when disarmed.
    pub fn remaining(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(Instant::now()))
    }

    /// Peeks at the token of the pending deadline.
    pub fn token(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.token)
    }

    /// How many deadlines have fired so far.
    pub fn fired_count(&self) -> u64 {
        self.fired
    }
}
