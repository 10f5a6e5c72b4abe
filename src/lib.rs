//! # counting-game
//!
//! Session engine for a counting game for young children. Each round shows
//! a number of items, the child taps them to count out loud, then picks the
//! matching number from three options.
//!
//! ## Design Principles
//!
//! 1. **Owned, not global**: A [`SessionController`] is an ordinary value.
//!    Hosts construct it, hold it and drive it.
//!
//! 2. **Collaborators at the seams**: Speech, confirmation dialogs and
//!    randomness come in through traits ([`SpeechAnnouncer`],
//!    [`ConfirmationPrompt`], [`RandomSource`]).
//!
//! 3. **Host-driven time**: Feedback pauses are timers on a virtual clock
//!    advanced by the host, so the whole game is deterministic under a
//!    fixed seed.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use counting_game::{GuessOutcome, RecordingAnnouncer, SessionConfig, SessionController, Status};
//!
//! let config = SessionConfig::default().with_seed(42);
//! let mut game = SessionController::with_config(config, RecordingAnnouncer::new()).unwrap();
//!
//! for index in 0..game.target_number() as usize {
//!     game.toggle_counted(index);
//! }
//! let answer = game.target_number();
//! assert_eq!(game.check_answer(answer), GuessOutcome::Correct);
//!
//! game.advance_clock(Duration::from_secs(2));
//! assert_eq!(game.current_round(), 2);
//! assert_eq!(game.status(), Status::Playing);
//! ```
//!
//! ## Modules
//!
//! - `core`: Session state, configuration, RNG, locales, display items
//! - `rounds`: Round type and random round generation
//! - `timers`: One-shot timer queue on a virtual clock
//! - `speech`: Speech announcer trait and backends
//! - `prompt`: Confirmation prompt trait
//! - `session`: The controller, history events and snapshots

pub mod core;
pub mod prompt;
pub mod rounds;
pub mod session;
pub mod speech;
pub mod timers;

// Re-export commonly used types
pub use crate::core::{
    AnnounceError, ConfigError, DisplayItem, Feedback, GameRng, Locale, RandomSource,
    Session, SessionConfig, Status, Strings, ITEMS,
};

pub use crate::prompt::{AlwaysConfirm, ConfirmationPrompt, NeverConfirm};

pub use crate::rounds::{generate_round, Round};

pub use crate::session::{GuessOutcome, SessionController, SessionEvent, SessionSnapshot};

pub use crate::speech::{Announcement, CommandAnnouncer, RecordingAnnouncer, SilentAnnouncer, SpeechAnnouncer};

pub use crate::timers::{ScheduledTimer, TimerId, TimerQueue, TimerTask};
