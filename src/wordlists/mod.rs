//! Word lists for Wordle
//!
//! Two lists with different jobs: solutions are the words a secret may be
//! drawn from, valid guesses decide whether a submitted row is legal.
//! Both are immutable once loaded and can be shared by any number of sessions.

mod embedded;
pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use embedded::{ALLOWED, SOLUTIONS};

/// Which of the two lists a load error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Solutions,
    ValidGuesses,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solutions => write!(f, "solutions"),
            Self::ValidGuesses => write!(f, "valid guesses"),
        }
    }
}

/// Word lists could not be loaded; no game can start
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {list} list from {}", path.display())]
    Io {
        list: ListKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} list is empty")]
    EmptySource(ListKind),
    #[error("{list} list line {line}: {entry:?} is not a word")]
    InvalidEntry {
        list: ListKind,
        line: usize,
        entry: String,
    },
}

/// Solutions and valid guesses
#[derive(Debug, Clone)]
pub struct WordLists {
    solutions: Vec<Word>,
    valid_guesses: FxHashSet<String>,
}

impl WordLists {
    /// Load both lists from newline-delimited text
    ///
    /// Repeated solutions are kept once, in first-seen order, so every
    /// distinct word has the same chance of being drawn.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` if either source is empty or holds a line that
    /// is not a word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordLists;
    ///
    /// let lists = WordLists::load("crane\nslate", "crane\nslate\nirate").unwrap();
    /// assert_eq!(lists.solution_count(), 2);
    /// assert!(lists.is_valid_guess("IRATE"));
    /// ```
    pub fn load(solutions_source: &str, valid_source: &str) -> Result<Self, DataLoadError> {
        let mut solutions = loader::parse_words(solutions_source, ListKind::Solutions)?;
        let listed = solutions.len();
        let mut seen = FxHashSet::default();
        solutions.retain(|word| seen.insert(word.text()));
        if solutions.len() < listed {
            tracing::debug!(
                dropped = listed - solutions.len(),
                "dropped repeated solutions"
            );
        }

        let valid_guesses: FxHashSet<String> =
            loader::parse_words(valid_source, ListKind::ValidGuesses)?
                .iter()
                .map(Word::text)
                .collect();

        let unguessable = solutions
            .iter()
            .filter(|word| !valid_guesses.contains(&word.text()))
            .count();
        if unguessable > 0 {
            tracing::warn!(
                count = unguessable,
                "solutions missing from the valid-guess list cannot be guessed"
            );
        }

        tracing::info!(
            solutions = solutions.len(),
            valid_guesses = valid_guesses.len(),
            "word lists loaded"
        );

        Ok(Self {
            solutions,
            valid_guesses,
        })
    }

    /// Load both lists from files
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError::Io` if a file cannot be read, otherwise the
    /// same errors as [`WordLists::load`].
    pub fn from_files(
        solutions_path: impl AsRef<Path>,
        valid_path: impl AsRef<Path>,
    ) -> Result<Self, DataLoadError> {
        let solutions = loader::read_source(solutions_path, ListKind::Solutions)?;
        let valid = loader::read_source(valid_path, ListKind::ValidGuesses)?;
        Self::load(&solutions, &valid)
    }

    /// The lists bundled with the crate
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is corrupt.
    pub fn embedded() -> Result<Self, DataLoadError> {
        Self::load(SOLUTIONS, ALLOWED)
    }

    /// Uniform random draw from all solutions
    ///
    /// Deterministic for a seeded RNG.
    pub fn pick_random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // `load` never builds an empty solution list
        &self.solutions[rng.random_range(0..self.solutions.len())]
    }

    /// Uniform random draw among solutions of a given width
    ///
    /// Returns `None` if no solution has that many letters.
    pub fn pick_random_solution_of_length<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Option<&Word> {
        let candidates: Vec<&Word> = self
            .solutions
            .iter()
            .filter(|word| word.len() == length)
            .collect();
        candidates.choose(rng).copied()
    }

    /// Check whether a guess is legal
    ///
    /// Case-insensitive and ignores surrounding whitespace. A guess of the
    /// wrong width never matches an entry of the session's width.
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.valid_guesses
            .contains(&word.trim().to_ascii_lowercase())
    }

    /// Check whether a word is one of the solutions
    #[must_use]
    pub fn contains_solution(&self, word: &Word) -> bool {
        self.solutions.contains(word)
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn valid_guess_count(&self) -> usize {
        self.valid_guesses.len()
    }
}
