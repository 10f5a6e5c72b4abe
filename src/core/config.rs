//! Session configuration.
//!
//! The defaults are the shipped game: 10 rounds, targets in 1..=12, three
//! answer options, a 2 second pause after a correct answer and a 1 second
//! pause after a wrong one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::locale::Locale;

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rounds per session. Completing the last one finishes the game.
    pub rounds: u32,

    /// Smallest possible target and option value.
    pub min_number: u8,

    /// Largest possible target and option value.
    pub max_number: u8,

    /// Distinct answer options shown each round, target included.
    pub option_count: usize,

    /// Pause between a correct answer and the next round.
    pub correct_delay: Duration,

    /// How long the "try again" feedback stays up.
    pub wrong_delay: Duration,

    /// Locale used when the controller is created.
    pub initial_locale: Locale,

    /// Seed for the default RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            min_number: 1,
            max_number: 12,
            option_count: 3,
            correct_delay: Duration::from_millis(2000),
            wrong_delay: Duration::from_millis(1000),
            initial_locale: Locale::ZhTw,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the inclusive target range.
    #[must_use]
    pub fn with_number_range(mut self, min: u8, max: u8) -> Self {
        self.min_number = min;
        self.max_number = max;
        self
    }

    /// Set the number of answer options.
    #[must_use]
    pub fn with_option_count(mut self, count: usize) -> Self {
        self.option_count = count;
        self
    }

    /// Set both feedback delays.
    #[must_use]
    pub fn with_delays(mut self, correct: Duration, wrong: Duration) -> Self {
        self.correct_delay = correct;
        self.wrong_delay = wrong;
        self
    }

    /// Set the starting locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.initial_locale = locale;
        self
    }

    /// Size of the inclusive number range.
    #[must_use]
    pub fn range_size(&self) -> usize {
        if self.max_number < self.min_number {
            0
        } else {
            usize::from(self.max_number - self.min_number) + 1
        }
    }

    /// Check that round generation can always terminate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.min_number == 0 || self.range_size() == 0 {
            return Err(ConfigError::EmptyRange {
                min: self.min_number,
                max: self.max_number,
            });
        }
        if self.option_count == 0 {
            return Err(ConfigError::NoOptions);
        }
        if self.option_count > self.range_size() {
            return Err(ConfigError::TooManyOptions {
                options: self.option_count,
                min: self.min_number,
                max: self.max_number,
            });
        }
        Ok(())
    }
}
