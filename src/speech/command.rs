//! Speech through an external text-to-speech program.

use std::io::ErrorKind;
use std::process::{Child, Command, Stdio};

use tracing::debug;

use crate::core::{AnnounceError, Locale};

use super::SpeechAnnouncer;

/// Announcer that spawns a TTS program per utterance.
///
/// The program is started with the locale's arguments followed by the
/// text, and is not waited on. If the program does not exist the
/// announcer switches itself off and behaves like a silent one.
#[derive(Debug)]
pub struct CommandAnnouncer {
    program: String,
    zh_tw_args: Vec<String>,
    en_us_args: Vec<String>,
    available: bool,
    children: Vec<Child>,
}

impl CommandAnnouncer {
    /// Run `program` with no locale-specific arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            zh_tw_args: Vec::new(),
            en_us_args: Vec::new(),
            available: true,
            children: Vec::new(),
        }
    }

    /// macOS `say` with a Taiwanese and an American voice.
    pub fn say() -> Self {
        Self::new("say")
            .with_locale_args(Locale::ZhTw, ["-v", "Mei-Jia"])
            .with_locale_args(Locale::EnUs, ["-v", "Samantha"])
    }

    /// `espeak-ng` with Mandarin and American English voices.
    pub fn espeak() -> Self {
        Self::new("espeak-ng")
            .with_locale_args(Locale::ZhTw, ["-v", "cmn"])
            .with_locale_args(Locale::EnUs, ["-v", "en-us"])
    }

    /// Arguments passed before the text when speaking `locale`.
    #[must_use]
    pub fn with_locale_args<I, S>(mut self, locale: Locale, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = args.into_iter().map(Into::into).collect();
        match locale {
            Locale::ZhTw => self.zh_tw_args = args,
            Locale::EnUs => self.en_us_args = args,
        }
        self
    }

    /// False once the program turned out to be missing.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    fn locale_args(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::ZhTw => &self.zh_tw_args,
            Locale::EnUs => &self.en_us_args,
        }
    }

    /// Drop handles of utterances that have finished.
    fn reap(&mut self) {
        self.children
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl SpeechAnnouncer for CommandAnnouncer {
    fn announce(&mut self, text: &str, locale: Locale) -> Result<(), AnnounceError> {
        if !self.available {
            return Ok(());
        }
        self.reap();

        let spawned = Command::new(&self.program)
            .args(self.locale_args(locale))
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                self.children.push(child);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(program = %self.program, "speech program not found, announcements disabled");
                self.available = false;
                Ok(())
            }
            Err(source) => Err(AnnounceError::Spawn {
                program: self.program.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_silent() {
        let mut announcer = CommandAnnouncer::new("definitely-not-a-speech-program-7f3a");

        assert!(announcer.announce("3", Locale::EnUs).is_ok());
        assert!(!announcer.is_available());

        // Later calls short-circuit
        assert!(announcer.announce("4", Locale::EnUs).is_ok());
    }

    #[test]
    fn test_locale_args() {
        let announcer = CommandAnnouncer::espeak();

        assert_eq!(announcer.locale_args(Locale::ZhTw), ["-v", "cmn"]);
        assert_eq!(announcer.locale_args(Locale::EnUs), ["-v", "en-us"]);
        assert!(announcer.is_available());
    }

    #[cfg(unix)]
    #[test]
    fn test_spawns_program() {
        let mut announcer = CommandAnnouncer::new("true");

        assert!(announcer.announce("hello", Locale::ZhTw).is_ok());
        assert!(announcer.is_available());
    }
}
