//! Interactive confirmation prompt.
//!
//! Deletion prompts default to **no**: pressing enter declines. The
//! `--yes` flag swaps this adapter for
//! [`modgen_adapters::PresetPrompt`], so scripts never block on stdin.

use std::io::{self, IsTerminal as _, Write as _};

use modgen_core::application::{ApplicationError, AppResult, ports::ConfirmationPrompt};

/// Prompt reading the answer from stdin.
#[derive(Debug, Clone, Copy)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationPrompt for StdinPrompt {
    fn confirm(&self, message: &str) -> AppResult<bool> {
        // Piped stdin takes the plain path so scripted answers stay
        // deterministic.
        #[cfg(feature = "interactive")]
        if io::stdin().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(message)
                .default(false)
                .interact()
                .map_err(|e| ApplicationError::Prompt(e.to_string()));
        }

        plain_confirm(message)
    }
}

fn plain_confirm(message: &str) -> AppResult<bool> {
    print!("{message} [y/N] ");
    io::stdout()
        .flush()
        .map_err(|e| ApplicationError::Prompt(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| ApplicationError::Prompt(e.to_string()))?;

    Ok(parse_answer(&input))
}

/// Only an explicit yes confirms; everything else, including an empty
/// line, declines.
fn parse_answer(input: &str) -> bool {
    let input = input.trim().to_ascii_lowercase();
    input == "y" || input == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_yes_confirms() {
        assert!(parse_answer("y\n"));
        assert!(parse_answer("yes\n"));
        assert!(parse_answer("  Y  \n"));
        assert!(parse_answer("YES"));
    }

    #[test]
    fn anything_else_declines() {
        assert!(!parse_answer("\n"));
        assert!(!parse_answer("n\n"));
        assert!(!parse_answer("no"));
        assert!(!parse_answer("yeah"));
        assert!(!parse_answer("definitely"));
    }
}
