//! Session state.
//!
//! ## Session
//!
//! Everything that survives between rounds:
//! - Current round (1-based) and score
//! - Active locale
//! - Status (playing, pausing after a correct answer, finished)
//! - The feedback flag shown after a guess
//! - The round currently on screen
//!
//! A session is never destroyed, only reset by `start_game`. Each reset
//! bumps the `epoch`, which timers use to recognise that they belong to
//! an earlier game.

use serde::{Deserialize, Serialize};

use super::items::DisplayItem;
use super::locale::Locale;
use crate::rounds::Round;

/// Result shown after a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Correct,
    Wrong,
}

/// Which operations the session accepts.
///
/// Counting and guessing are only accepted while `Playing`. A wrong guess
/// does not leave `Playing`; it only raises the [`Feedback::Wrong`] flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Playing,
    /// Correct answer given, waiting for the next round.
    Feedback,
    Finished,
}

impl Status {
    /// Check if input is currently accepted.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Status::Playing)
    }
}

/// Mutable state of one game session.
#[derive(Clone, Debug, Serialize)]
pub struct Session {
    /// Current round, starting at 1.
    pub current_round: u32,

    /// Correct answers so far.
    pub score: u32,

    /// Locale for announcements and text lookups.
    pub locale: Locale,

    /// Current status.
    pub status: Status,

    /// Transient feedback flag, cleared by the next round or a timer.
    pub feedback: Option<Feedback>,

    /// The round being played.
    pub round: Round,

    /// Reset counter, bumped by every `start_game`.
    pub epoch: u64,
}

impl Session {
    /// Create a session on round 1 with an empty placeholder round.
    ///
    /// The controller replaces the placeholder before it is observable.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            current_round: 1,
            score: 0,
            locale,
            status: Status::Playing,
            feedback: None,
            round: Round::default(),
            epoch: 0,
        }
    }

    /// Reset round and score and start a new epoch.
    pub fn reset(&mut self) {
        self.current_round = 1;
        self.score = 0;
        self.feedback = None;
        self.epoch += 1;
    }

    /// Item shown in the current round.
    #[must_use]
    pub fn current_item(&self) -> DisplayItem {
        DisplayItem::for_round(self.current_round)
    }

    /// Feedback currently showing, if any.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }
}
