//! One-shot, cancellable display delay between rounds

use std::time::{Duration, Instant};
use crate::controller::ResetTicket;

/// How long a resolved round stays on screen
pub const RESET_DELAY: Duration = Duration::from_millis(2000);

/// Deadline-based timer for the post-round reset
///
/// Never blocks: the host polls it from its event loop and gets the
/// ticket back once, when the deadline has passed.
#[derive(Clone, Debug)]
pub struct RoundTimer {
    delay: Duration,
    pending: Option<(Instant, ResetTicket)>,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::with_delay(RESET_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Schedule `ticket`, replacing anything already pending
    pub fn arm(&mut self, ticket: ResetTicket, now: Instant) {
        self.pending = Some((now + self.delay, ticket));
    }

    pub fn cancel(&mut self) -> Option<ResetTicket> {
        self.pending.take().map(|(_, ticket)| ticket)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(deadline, _)| deadline)
    }

    /// Time left before firing; zero once due
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Take the ticket if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<ResetTicket> {
        match self.pending {
            Some((deadline, _)) if now >= deadline => self.cancel(),
            _ => None,
        }
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new()
    }
}
