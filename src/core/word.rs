//! Word and letter representation
//!
//! Words are stored as lowercase ASCII bytes. Comparison is always done on the
//! lowercase form; display uppercases.

use std::fmt;
use thiserror::Error;

/// A single ASCII letter, normalized to lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, lowercasing it
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self(ch.to_ascii_lowercase() as u8))
    }

    /// Lowercase byte value
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Position in the alphabet (a = 0 .. z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    /// Lowercase character used for comparison
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Uppercase character used for display
    #[inline]
    #[must_use]
    pub const fn display_char(self) -> char {
        self.0.to_ascii_uppercase() as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_char())
    }
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only ASCII letters, found {0:?}")]
    InvalidCharacter(char),
}

/// A word of ASCII letters
///
/// The width of a word is its letter count. Any width is accepted here; a game
/// session fixes the width to that of its secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters. Surrounding whitespace is not trimmed here.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text
            .chars()
            .map(|ch| Letter::from_char(ch).ok_or(WordError::InvalidCharacter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { letters })
    }

    /// Build a word from letters already collected (e.g. a completed row)
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_letters(letters: &[Letter]) -> Option<Self> {
        (!letters.is_empty()).then(|| Self {
            letters: letters.to_vec(),
        })
    }

    /// Lowercase text of the word
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }

    /// Letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Count of each letter, indexed by alphabet position
    ///
    /// Used as the letter pool during evaluation.
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [usize; 26] {
        let mut counts = [0usize; 26];
        for letter in &self.letters {
            counts[letter.index()] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
