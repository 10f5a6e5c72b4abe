//! Speech announcer collaborators.
//!
//! The controller hands every announcement to a [`SpeechAnnouncer`] and
//! never waits on it. Backends:
//!
//! - [`SilentAnnouncer`]: no speech on this platform
//! - [`RecordingAnnouncer`]: keeps a transcript (captions, tests)
//! - [`CommandAnnouncer`]: spawns a system text-to-speech program

mod command;

pub use command::CommandAnnouncer;

use serde::Serialize;

use crate::core::{AnnounceError, Locale};

/// Vocalizes text in a locale.
///
/// Implementations must return promptly; speech itself happens in the
/// background. Errors are logged by the controller and otherwise ignored.
pub trait SpeechAnnouncer {
    fn announce(&mut self, text: &str, locale: Locale) -> Result<(), AnnounceError>;
}

impl<T: SpeechAnnouncer + ?Sized> SpeechAnnouncer for Box<T> {
    fn announce(&mut self, text: &str, locale: Locale) -> Result<(), AnnounceError> {
        (**self).announce(text, locale)
    }
}

/// Announcer for platforms without speech.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAnnouncer;

impl SpeechAnnouncer for SilentAnnouncer {
    fn announce(&mut self, _text: &str, _locale: Locale) -> Result<(), AnnounceError> {
        Ok(())
    }
}

/// A single recorded announcement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub text: String,
    pub locale: Locale,
}

/// Announcer that records everything it is asked to say.
#[derive(Clone, Debug, Default)]
pub struct RecordingAnnouncer {
    transcript: Vec<Announcement>,
}

impl RecordingAnnouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything announced so far, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[Announcement] {
        &self.transcript
    }

    /// Text of the most recent announcement.
    #[must_use]
    pub fn last_text(&self) -> Option<&str> {
        self.transcript.last().map(|a| a.text.as_str())
    }

    /// Drop the transcript.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}

impl SpeechAnnouncer for RecordingAnnouncer {
    fn announce(&mut self, text: &str, locale: Locale) -> Result<(), AnnounceError> {
        self.transcript.push(Announcement {
            text: text.to_string(),
            locale,
        });
        Ok(())
    }
}
