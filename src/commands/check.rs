//! Check command
//!
//! Evaluates one guess against a chosen secret without playing a game.

use crate::core::{Feedback, Word, evaluate};
use crate::wordlists::WordLists;
use anyhow::{Context, Result, bail};

/// Result of checking a guess
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// Whether the guess would be accepted in a game
    pub guess_is_valid: bool,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either input is not a word or their lengths differ.
pub fn check_guess(secret: &str, guess: &str, lists: &WordLists) -> Result<CheckResult> {
    let secret_word =
        Word::new(secret.trim()).with_context(|| format!("Invalid secret: {secret:?}"))?;
    let guess_word = Word::new(guess.trim()).with_context(|| format!("Invalid guess: {guess:?}"))?;

    if secret_word.len() != guess_word.len() {
        bail!(
            "Secret and guess must have the same length ({} vs {})",
            secret_word.len(),
            guess_word.len()
        );
    }

    let feedback = evaluate(&secret_word, &guess_word)?;

    Ok(CheckResult {
        guess_is_valid: lists.is_valid_guess(guess),
        secret: secret_word,
        guess: guess_word,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> WordLists {
        WordLists::load("speed", "speed\nerase").unwrap()
    }

    #[test]
    fn check_duplicate_letters() {
        let result = check_guess("SPEED", "erase", &lists()).unwrap();
        assert_eq!(result.feedback.to_emoji(), "🟨⬛⬛🟨🟨");
        assert!(result.guess_is_valid);
    }

    #[test]
    fn check_flags_unknown_guess() {
        let result = check_guess("speed", "steed", &lists()).unwrap();
        assert!(!result.guess_is_valid);
        assert_eq!(result.feedback.count_correct(), 4);
    }

    #[test]
    fn check_rejects_bad_input() {
        assert!(check_guess("speed", "sp33d", &lists()).is_err());
        assert!(check_guess("speed", "spend!", &lists()).is_err());
        assert!(check_guess("speed", "speeds", &lists()).is_err());
    }
}
