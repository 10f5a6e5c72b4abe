//! Session history events.
//!
//! Every accepted operation appends one event. The history is reset with
//! the session, so it always describes the current game only.

use serde::{Deserialize, Serialize};

use crate::core::Locale;

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Round and score were reset.
    GameStarted { epoch: u64 },

    /// A new round was put on screen.
    RoundGenerated { round: u32, target: u8 },

    /// An item was tapped for the first time.
    ItemCounted { index: usize, count: usize },

    /// A guess was accepted.
    Guessed { round: u32, guess: u8, correct: bool },

    /// Wrong-answer feedback ended.
    FeedbackCleared { round: u32 },

    /// The last round was completed.
    GameFinished { score: u32 },

    /// The player declined to exit.
    ExitDeclined,

    /// The locale was switched.
    LanguageChanged { locale: Locale },
}

impl SessionEvent {
    /// Check if this event came from a guess.
    #[must_use]
    pub fn is_guess(&self) -> bool {
        matches!(self, SessionEvent::Guessed { .. })
    }
}
