//! Session controller integration tests.
//!
//! These tests play whole games through the public API, using a scripted
//! random source where a specific target is needed.

use std::collections::VecDeque;
use std::time::Duration;

use counting_game::{
    AlwaysConfirm, DisplayItem, Feedback, GameRng, GuessOutcome, Locale, RandomSource,
    RecordingAnnouncer, SessionConfig, SessionController, SessionEvent, Status,
};

/// Random source that replays scripted draws, then falls back to a seeded RNG.
struct ScriptedRng {
    draws: VecDeque<u8>,
    fallback: GameRng,
}

impl ScriptedRng {
    fn new(draws: &[u8]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            fallback: GameRng::new(99),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn gen_inclusive(&mut self, low: u8, high: u8) -> u8 {
        match self.draws.pop_front() {
            Some(n) => {
                assert!((low..=high).contains(&n), "scripted draw {n} outside {low}..={high}");
                n
            }
            None => self.fallback.gen_inclusive(low, high),
        }
    }

    fn shuffle(&mut self, values: &mut [u8]) {
        values.reverse();
    }
}

fn english_game(seed: u64) -> SessionController<RecordingAnnouncer> {
    let config = SessionConfig::default().with_seed(seed).with_locale(Locale::EnUs);
    SessionController::with_config(config, RecordingAnnouncer::new()).unwrap()
}

fn correct_delay() -> Duration {
    Duration::from_secs(2)
}

// =============================================================================
// Scenarios
// =============================================================================

/// Target forced to 7: guessing 7 scores and moves to round 2.
#[test]
fn test_forced_target_scenario() {
    // Target 7, then option draws 7 (rejected duplicate), 3, 11
    let rng = ScriptedRng::new(&[7, 7, 3, 11]);
    let config = SessionConfig::default().with_locale(Locale::EnUs);
    let mut game = SessionController::with_rng(config, rng, RecordingAnnouncer::new()).unwrap();

    assert_eq!(game.current_round(), 1);
    assert_eq!(game.target_number(), 7);
    assert_eq!(game.options(), &[11, 3, 7]);

    assert_eq!(game.check_answer(7), GuessOutcome::Correct);
    assert_eq!(game.score(), 1);
    assert_eq!(game.status(), Status::Feedback);
    assert_eq!(game.feedback(), Some(Feedback::Correct));

    game.advance_clock(correct_delay());

    assert_eq!(game.current_round(), 2);
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.current_item(), DisplayItem::Bird);
    assert!(game.options().contains(&game.target_number()));
}

/// Ten correct answers in a row finish the game with a full score.
#[test]
fn test_perfect_game() {
    let mut game = english_game(42);

    for round in 1..=10 {
        assert_eq!(game.current_round(), round);
        let answer = game.target_number();
        assert_eq!(game.check_answer(answer), GuessOutcome::Correct);
        game.advance_clock(correct_delay());
    }

    assert_eq!(game.score(), 10);
    assert_eq!(game.current_round(), 10);
    assert_eq!(game.status(), Status::Finished);
    assert_eq!(
        game.announcer().last_text(),
        Some("Game Over! You got 10 points.")
    );
    assert_eq!(
        game.snapshot().game_over_message().as_deref(),
        Some("Game Over! You got 10 points.")
    );
    assert_eq!(game.history().last(), Some(&SessionEvent::GameFinished { score: 10 }));
}

/// Finishing does not change the score.
#[test]
fn test_finish_keeps_score() {
    let mut game = english_game(8);

    for _ in 1..10 {
        let answer = game.target_number();
        game.check_answer(answer);
        game.advance_clock(correct_delay());
    }

    let answer = game.target_number();
    game.check_answer(answer);
    let before = game.score();

    game.advance_clock(correct_delay());

    assert_eq!(game.status(), Status::Finished);
    assert_eq!(game.score(), before);
}

/// Wrong answers cost nothing; the child can retry the same round.
#[test]
fn test_wrong_then_right() {
    let mut game = english_game(17);
    let target = game.target_number();
    let options = game.options().to_vec();
    let wrong = *options.iter().find(|&&n| n != target).unwrap();

    assert_eq!(game.check_answer(wrong), GuessOutcome::Wrong);
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.feedback(), Some(Feedback::Wrong));
    assert_eq!(game.score(), 0);

    game.advance_clock(Duration::from_secs(1));

    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.feedback(), None);
    assert_eq!(game.target_number(), target);
    assert_eq!(game.options(), options.as_slice());

    assert_eq!(game.check_answer(target), GuessOutcome::Correct);
    assert_eq!(game.score(), 1);
}

/// A wrong guess leaves the round open: counting goes on and the right
/// answer is taken straight away.
#[test]
fn test_retry_immediately_after_wrong_guess() {
    let mut game = english_game(23);
    let target = game.target_number();
    let wrong = *game.options().iter().find(|&&n| n != target).unwrap();

    game.toggle_counted(0);
    assert_eq!(game.check_answer(wrong), GuessOutcome::Wrong);

    assert!(game.toggle_counted(1));
    assert_eq!(game.round().counted(), 2);
    assert_eq!(game.announcer().last_text(), Some("2"));

    assert_eq!(game.check_answer(target), GuessOutcome::Correct);
    assert_eq!(game.score(), 1);
    assert_eq!(game.status(), Status::Feedback);

    game.advance_clock(correct_delay());
    assert_eq!(game.current_round(), 2);
    assert_eq!(game.round().counted(), 0);
}

/// Nothing is accepted once the game is over, until it restarts.
#[test]
fn test_finished_game_ignores_input() {
    let config = SessionConfig::default().with_seed(3).with_rounds(1);
    let mut game = SessionController::with_config(config, RecordingAnnouncer::new()).unwrap();

    let answer = game.target_number();
    game.check_answer(answer);
    game.advance_clock(correct_delay());
    assert_eq!(game.status(), Status::Finished);

    let history_len = game.history().len();
    assert_eq!(game.check_answer(answer), GuessOutcome::Ignored);
    assert!(!game.toggle_counted(0));
    assert_eq!(game.score(), 1);
    assert_eq!(game.history().len(), history_len);

    game.start_game();
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.current_round(), 1);
}

/// Counting is cleared between rounds.
#[test]
fn test_counted_cleared_each_round() {
    let mut game = english_game(21);

    game.toggle_counted(0);
    game.toggle_counted(1);
    assert_eq!(game.round().counted(), 2);

    let answer = game.target_number();
    game.check_answer(answer);
    game.advance_clock(correct_delay());

    assert_eq!(game.current_round(), 2);
    assert_eq!(game.round().counted(), 0);
    assert!(game.snapshot().counted_indices.is_empty());
}

// =============================================================================
// Announcements and locale
// =============================================================================

#[test]
fn test_announcements_follow_locale() {
    let mut game = english_game(5);

    game.toggle_counted(0);
    game.toggle_language();
    game.toggle_counted(1);
    let answer = game.target_number();
    game.check_answer(answer);

    let transcript = game.announcer().transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!((transcript[0].text.as_str(), transcript[0].locale), ("1", Locale::EnUs));
    assert_eq!((transcript[1].text.as_str(), transcript[1].locale), ("2", Locale::ZhTw));
    assert_eq!((transcript[2].text.as_str(), transcript[2].locale), ("答對了！", Locale::ZhTw));
}

#[test]
fn test_language_does_not_touch_round() {
    let mut game = english_game(6);
    game.toggle_counted(2);
    let before = game.snapshot();

    game.toggle_language();
    game.toggle_language();

    let after = game.snapshot();
    assert_eq!(after, before);
}

#[test]
fn test_default_locale_is_chinese() {
    let config = SessionConfig::default().with_seed(1);
    let game = SessionController::with_config(config, RecordingAnnouncer::new()).unwrap();

    assert_eq!(game.locale(), Locale::ZhTw);
    assert_eq!(game.snapshot().round_label(), "回合 1 / 10");
}

#[test]
fn test_exit_confirmed_mid_game() {
    let mut game = english_game(12);
    let answer = game.target_number();
    game.check_answer(answer);
    game.advance_clock(correct_delay());
    game.toggle_language();

    assert!(game.exit_game(&mut AlwaysConfirm));

    assert_eq!(game.current_round(), 1);
    assert_eq!(game.score(), 0);
    // Locale is a preference, not game state
    assert_eq!(game.locale(), Locale::ZhTw);
}
