//! The session controller: owns the session and drives its state machine.
//!
//! ```text
//! Playing --correct--> Feedback [Correct] --correct_delay--> Playing (next round) | Finished
//! Playing --wrong----> Playing  [Wrong]   --wrong_delay----> Playing (flag cleared)
//! any     --start_game--> Playing (round 1)
//! ```
//!
//! A wrong guess keeps the session in `Playing`: the child can keep
//! counting and guess again while the "try again" flag is up. Only the
//! latest wrong guess owns the clear timer; an earlier one is cancelled.
//!
//! Feedback pauses are timers on the controller's [`TimerQueue`]; the host
//! moves time forward with [`SessionController::advance_clock`]. A timer
//! only acts if the session is still in the epoch, round and state it was
//! scheduled for. `start_game` cancels every pending timer.

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, warn};

use crate::core::{
    ConfigError, DisplayItem, Feedback, GameRng, Locale, RandomSource, Session, SessionConfig, Status,
    Strings,
};
use crate::prompt::ConfirmationPrompt;
use crate::rounds::{generate_round, Round};
use crate::speech::SpeechAnnouncer;
use crate::timers::{ScheduledTimer, TimerId, TimerQueue, TimerTask};

use super::event::SessionEvent;
use super::snapshot::SessionSnapshot;

/// Result of [`SessionController::check_answer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// The session was not accepting guesses.
    Ignored,
}

/// Counting game session controller.
///
/// Generic over the speech backend and the random source so that both can
/// be substituted in tests.
pub struct SessionController<A, R = GameRng> {
    config: SessionConfig,
    session: Session,
    rng: R,
    announcer: A,
    timers: TimerQueue,
    /// Pending timer that will clear the wrong-answer flag.
    clear_timer: Option<TimerId>,
    history: Vector<SessionEvent>,
}

impl<A: SpeechAnnouncer> SessionController<A, GameRng> {
    /// Create a controller with the default configuration and start a game.
    pub fn new(announcer: A) -> Self {
        let config = SessionConfig::default();
        let rng = Self::default_rng(&config);
        Self::build(config, rng, announcer)
    }

    /// Create a controller with a custom configuration and start a game.
    pub fn with_config(config: SessionConfig, announcer: A) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = Self::default_rng(&config);
        Ok(Self::build(config, rng, announcer))
    }

    fn default_rng(config: &SessionConfig) -> GameRng {
        config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}

impl<A: SpeechAnnouncer, R: RandomSource> SessionController<A, R> {
    /// Create a controller with an injected random source and start a game.
    pub fn with_rng(config: SessionConfig, rng: R, announcer: A) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng, announcer))
    }

    fn build(config: SessionConfig, rng: R, announcer: A) -> Self {
        let mut controller = Self {
            session: Session::new(config.initial_locale),
            config,
            rng,
            announcer,
            timers: TimerQueue::new(),
            clear_timer: None,
            history: Vector::new(),
        };
        controller.start_game();
        controller
    }

    // === Operations ===

    /// Reset round and score, then generate round 1.
    ///
    /// Pending feedback timers from the previous game are cancelled.
    pub fn start_game(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.clear_timer = None;
        self.session.reset();
        self.history = Vector::new();

        info!(
            epoch = self.session.epoch,
            cancelled_timers = cancelled,
            "game started"
        );
        self.record(SessionEvent::GameStarted {
            epoch: self.session.epoch,
        });

        self.generate_round();
    }

    /// Replace the current round with a freshly generated one.
    pub fn generate_round(&mut self) {
        self.session.round = generate_round(&self.config, &mut self.rng);
        self.session.status = Status::Playing;
        self.session.feedback = None;
        self.cancel_clear_timer();

        debug!(
            round = self.session.current_round,
            target = self.session.round.target(),
            options = ?self.session.round.options(),
            "round generated"
        );
        self.record(SessionEvent::RoundGenerated {
            round: self.session.current_round,
            target: self.session.round.target(),
        });
    }

    /// Mark an item as counted and speak the running count.
    ///
    /// Returns true if the item was newly counted. Ignored unless playing.
    pub fn toggle_counted(&mut self, index: usize) -> bool {
        if !self.session.status.is_playing() {
            debug!(index, status = ?self.session.status, "count ignored");
            return false;
        }

        let Some(count) = self.session.round.mark_counted(index) else {
            return false;
        };

        self.record(SessionEvent::ItemCounted { index, count });
        self.announce(&count.to_string());
        true
    }

    /// Judge a guess.
    ///
    /// A correct guess scores a point and schedules the next round; a wrong
    /// one raises the feedback flag for `wrong_delay` without leaving
    /// `Playing`. Ignored unless playing.
    pub fn check_answer(&mut self, number: u8) -> GuessOutcome {
        if !self.session.status.is_playing() {
            debug!(guess = number, status = ?self.session.status, "guess ignored");
            return GuessOutcome::Ignored;
        }

        let round = self.session.current_round;
        let correct = number == self.session.round.target();
        self.record(SessionEvent::Guessed {
            round,
            guess: number,
            correct,
        });

        self.cancel_clear_timer();

        if correct {
            self.session.score += 1;
            self.session.status = Status::Feedback;
            self.session.feedback = Some(Feedback::Correct);
            debug!(round, score = self.session.score, "correct guess");

            let text = self.strings().correct;
            self.announce(text);
            self.schedule(self.config.correct_delay, TimerTask::AdvanceRound);
            GuessOutcome::Correct
        } else {
            self.session.feedback = Some(Feedback::Wrong);
            debug!(round, guess = number, "wrong guess");

            let text = self.strings().try_again;
            self.announce(text);
            let id = self.schedule(self.config.wrong_delay, TimerTask::ClearFeedback);
            self.clear_timer = Some(id);
            GuessOutcome::Wrong
        }
    }

    /// Ask to leave the game; restart from round 1 if confirmed.
    ///
    /// Returns true if the game was restarted.
    pub fn exit_game<P: ConfirmationPrompt + ?Sized>(&mut self, prompt: &mut P) -> bool {
        if prompt.confirm(self.strings().exit_confirm) {
            self.start_game();
            true
        } else {
            self.record(SessionEvent::ExitDeclined);
            false
        }
    }

    /// Switch to the other locale. Returns the new locale.
    pub fn toggle_language(&mut self) -> Locale {
        self.session.locale = self.session.locale.toggled();
        debug!(locale = %self.session.locale, "language changed");
        self.record(SessionEvent::LanguageChanged {
            locale: self.session.locale,
        });
        self.session.locale
    }

    /// Move the clock forward and fire every timer that comes due.
    ///
    /// Returns the number of timers that acted on the session.
    pub fn advance_clock(&mut self, elapsed: Duration) -> usize {
        let until = self.timers.now() + elapsed;
        let mut fired = 0;

        while let Some(timer) = self.timers.pop_due(until) {
            if self.fire(&timer) {
                fired += 1;
            }
        }

        self.timers.advance_to(until);
        fired
    }

    // === Timers ===

    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        let id = self
            .timers
            .schedule(delay, task, self.session.epoch, self.session.current_round);
        debug!(timer = %id, ?task, ?delay, "timer scheduled");
        id
    }

    /// A newer guess supersedes the pending wrong-answer clear.
    fn cancel_clear_timer(&mut self) {
        if let Some(id) = self.clear_timer.take() {
            if self.timers.cancel(id) {
                debug!(timer = %id, "clear timer superseded");
            }
        }
    }

    fn fire(&mut self, timer: &ScheduledTimer) -> bool {
        let expected = match timer.task {
            TimerTask::AdvanceRound => (Status::Feedback, Some(Feedback::Correct)),
            TimerTask::ClearFeedback => (Status::Playing, Some(Feedback::Wrong)),
        };

        let current = timer.epoch == self.session.epoch
            && timer.round == self.session.current_round
            && (self.session.status, self.session.feedback) == expected;
        if !current {
            debug!(timer = %timer.id, task = ?timer.task, "stale timer dropped");
            return false;
        }

        match timer.task {
            TimerTask::AdvanceRound => self.advance_round(),
            TimerTask::ClearFeedback => {
                self.clear_timer = None;
                self.session.feedback = None;
                self.record(SessionEvent::FeedbackCleared { round: timer.round });
            }
        }
        true
    }

    fn advance_round(&mut self) {
        if self.session.current_round >= self.config.rounds {
            self.session.status = Status::Finished;
            self.session.feedback = None;
            info!(score = self.session.score, "game finished");
            self.record(SessionEvent::GameFinished {
                score: self.session.score,
            });

            let message = self.strings().game_over_message(self.session.score);
            self.announce(&message);
        } else {
            self.session.current_round += 1;
            self.generate_round();
        }
    }

    // === Helpers ===

    fn announce(&mut self, text: &str) {
        let locale = self.session.locale;
        if let Err(err) = self.announcer.announce(text, locale) {
            warn!(%err, %locale, "announcement failed");
        }
    }

    fn record(&mut self, event: SessionEvent) {
        self.history.push_back(event);
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.session.current_round
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.session.status
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.session.feedback()
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.session.round
    }

    #[must_use]
    pub fn target_number(&self) -> u8 {
        self.session.round.target()
    }

    #[must_use]
    pub fn options(&self) -> &[u8] {
        self.session.round.options()
    }

    #[must_use]
    pub fn current_item(&self) -> DisplayItem {
        self.session.current_item()
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.session.locale
    }

    /// String bundle for the active locale.
    #[must_use]
    pub fn strings(&self) -> &'static Strings {
        self.session.locale.strings()
    }

    /// Events of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<SessionEvent> {
        &self.history
    }

    #[must_use]
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Timers that have not fired yet, in scheduling order.
    #[must_use]
    pub fn pending_timers(&self) -> &[ScheduledTimer] {
        self.timers.pending()
    }

    #[must_use]
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    pub fn announcer_mut(&mut self) -> &mut A {
        &mut self.announcer
    }

    /// Everything observable, in one value.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_round: self.session.current_round,
            total_rounds: self.config.rounds,
            score: self.session.score,
            target_number: self.session.round.target(),
            options: self.session.round.options().to_vec(),
            status: self.session.status,
            feedback: self.session.feedback(),
            current_item: self.session.current_item(),
            counted_indices: self.session.round.counted_indices().iter().copied().collect(),
            locale: self.session.locale,
            strings: *self.strings(),
        }
    }
}
