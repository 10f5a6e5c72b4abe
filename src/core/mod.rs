//! Core types: session state, configuration, RNG, locales, display items.
//!
//! Nothing in here talks to the outside world; the controller in
//! `session` wires these together with the speech and prompt collaborators.

pub mod config;
pub mod error;
pub mod items;
pub mod locale;
pub mod rng;
pub mod state;

pub use config::SessionConfig;
pub use error::{AnnounceError, ConfigError};
pub use items::{DisplayItem, ITEMS};
pub use locale::{Locale, Strings};
pub use rng::{GameRng, RandomSource};
pub use state::{Feedback, Session, Status};
