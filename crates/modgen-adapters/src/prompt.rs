//! Non-interactive confirmation adapter.

use modgen_core::application::{AppResult, ports::ConfirmationPrompt};

/// Prompt with a predetermined answer, for `--yes` runs and scripts.
#[derive(Debug, Clone, Copy)]
pub struct PresetPrompt {
    answer: bool,
}

impl PresetPrompt {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }

    /// Answers yes to everything.
    pub fn assume_yes() -> Self {
        Self::new(true)
    }
}

impl ConfirmationPrompt for PresetPrompt {
    fn confirm(&self, _message: &str) -> AppResult<bool> {
        Ok(self.answer)
    }
}
