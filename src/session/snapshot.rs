//! Read-only view of a session for rendering layers.

use serde::Serialize;

use crate::core::{DisplayItem, Feedback, Locale, Status, Strings};

/// Everything a renderer needs to draw the current screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub current_round: u32,
    pub total_rounds: u32,
    pub score: u32,
    pub target_number: u8,
    pub options: Vec<u8>,
    pub status: Status,
    pub feedback: Option<Feedback>,
    pub current_item: DisplayItem,
    /// Tapped item indices, ascending.
    pub counted_indices: Vec<usize>,
    pub locale: Locale,
    pub strings: Strings,
}

impl SessionSnapshot {
    /// Header line, e.g. `Round 3 / 10`.
    #[must_use]
    pub fn round_label(&self) -> String {
        format!("{} {} / {}", self.strings.round, self.current_round, self.total_rounds)
    }

    /// Score line, e.g. `Score: 2`.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}: {}", self.strings.score, self.score)
    }

    /// Game-over message, once the session has finished.
    #[must_use]
    pub fn game_over_message(&self) -> Option<String> {
        (self.status == Status::Finished).then(|| self.strings.game_over_message(self.score))
    }
}
