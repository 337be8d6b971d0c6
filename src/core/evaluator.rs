//! Guess evaluation
//!
//! Implements Wordle's feedback rules including duplicate letters: a letter in
//! the guess is only credited as many times as it occurs in the secret.

use super::feedback::{Classification, Feedback};
use super::word::Word;
use thiserror::Error;

/// A guess reached the evaluator with a different width than the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("guess has {guess} letters but the secret has {secret}")]
pub struct LengthMismatchError {
    pub secret: usize,
    pub guess: usize,
}

/// Evaluate `guess` against `secret`
///
/// # Algorithm
/// 1. Build a pool with the count of each letter in the secret
/// 2. First pass: mark exact position matches Correct and take them from the pool
/// 3. Second pass, left to right: mark a letter Present if the pool still
///    holds it (and take one), otherwise Absent
///
/// A letter is never credited (Correct or Present) more times than it occurs
/// in the secret. A single "does the secret contain it anywhere" pass would
/// break that for repeated letters.
///
/// # Errors
/// Returns `LengthMismatchError` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, evaluate};
///
/// let secret = Word::new("slate").unwrap();
/// let guess = Word::new("crane").unwrap();
/// let feedback = evaluate(&secret, &guess).unwrap();
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(feedback.to_emoji(), "⬛⬛🟩⬛🟩");
/// ```
pub fn evaluate(secret: &Word, guess: &Word) -> Result<Feedback, LengthMismatchError> {
    if secret.len() != guess.len() {
        return Err(LengthMismatchError {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let mut result = vec![Classification::Absent; guess.len()];
    let mut pool = secret.letter_counts();

    for (i, (g, s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            result[i] = Classification::Correct;
            pool[g.index()] -= 1;
        }
    }

    for (i, letter) in guess.letters().iter().enumerate() {
        if result[i] == Classification::Correct {
            continue;
        }

        let remaining = &mut pool[letter.index()];
        if *remaining > 0 {
            *remaining -= 1;
            result[i] = Classification::Present;
        }
    }

    let feedback = Feedback::new(result);
    tracing::debug!(guess = %guess, feedback = %feedback, "evaluated guess");

    Ok(feedback)
}
