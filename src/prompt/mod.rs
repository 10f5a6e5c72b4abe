//! Confirmation prompt collaborator.
//!
//! Used by `exit_game` to ask whether the player really wants to leave.
//! The call blocks until the player answers.

/// A modal yes/no question.
pub trait ConfirmationPrompt {
    /// Ask `message`. Returns true if the player confirmed.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmationPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Prompt that always confirms.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysConfirm;

impl ConfirmationPrompt for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Prompt that always cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverConfirm;

impl ConfirmationPrompt for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}
