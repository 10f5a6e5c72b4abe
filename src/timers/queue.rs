//! One-shot timer queue on a host-driven clock.
//!
//! The queue never reads wall-clock time. The host advances `now`, and
//! timers whose due time has been reached are popped in due order
//! (ties broken by scheduling order).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Unique identifier for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerTask {
    /// Leave correct-answer feedback and move to the next round.
    AdvanceRound,
    /// Leave wrong-answer feedback and resume the same round.
    ClearFeedback,
}

/// A pending timer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTimer {
    pub id: TimerId,

    /// Clock time at which the timer fires.
    pub due: Duration,

    pub task: TimerTask,

    /// Session epoch at scheduling time.
    pub epoch: u64,

    /// Round at scheduling time.
    pub round: u32,
}

/// Pending one-shot timers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimerQueue {
    now: Duration,
    pending: Vec<ScheduledTimer>,
    next_id: u64,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a task `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: TimerTask, epoch: u64, round: u32) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        self.pending.push(ScheduledTimer {
            id,
            due: self.now + delay,
            task,
            epoch,
            round,
        });

        id
    }

    /// Cancel a timer.
    ///
    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Cancel every pending timer. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Remove and return the earliest timer due at or before `until`.
    ///
    /// Moves the clock forward to the popped timer's due time so that
    /// timers scheduled while handling it are relative to when it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTimer> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))?;

        let timer = self.pending.remove(index);
        self.now = self.now.max(timer.due);
        Some(timer)
    }

    /// Move the clock forward. The clock never runs backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Due time of the next timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Pending timers in scheduling order.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledTimer] {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
