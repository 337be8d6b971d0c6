//! Core domain types for Wordle
//!
//! Words, feedback, and the guess evaluator. Everything here is pure and has no
//! notion of a game in progress.

mod evaluator;
mod feedback;
mod word;

pub use evaluator::{LengthMismatchError, evaluate};
pub use feedback::{Classification, Feedback};
pub use word::{Letter, Word, WordError};
