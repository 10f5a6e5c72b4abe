//! Deferred one-shot tasks.
//!
//! Feedback pauses are modelled as timers in a [`TimerQueue`] owned by the
//! controller. Each timer remembers the session epoch and round it was
//! scheduled for; the controller checks both against the live session
//! when the timer fires.

mod queue;

pub use queue::{ScheduledTimer, TimerId, TimerQueue, TimerTask};
