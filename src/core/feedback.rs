//! Per-letter feedback for an evaluated guess
//!
//! Each position of a guess gets one [`Classification`]:
//! - Correct: letter in the right position (green)
//! - Present: letter elsewhere in the unclaimed rest of the secret (yellow)
//! - Absent: letter not in the unclaimed rest of the secret (gray)
//!
//! `Empty` only appears on tiles that have not been evaluated yet.

use std::fmt;

/// Classification of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    #[default]
    Empty,
    Correct,
    Present,
    Absent,
}

impl Classification {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts G/g/🟩, Y/y/🟨 and -/_/⬛/⬜ (gray).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one guess, one classification per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Classification>);

impl Feedback {
    pub(crate) const fn new(classifications: Vec<Classification>) -> Self {
        Self(classifications)
    }

    /// Classifications in guess order
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Classification::Correct)
    }

    /// Count of Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Classification::Correct)
    }

    /// Count of Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Classification::Present)
    }

    fn count(&self, class: Classification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let feedback: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬛🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let classifications = s
            .chars()
            .map(Classification::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        if classifications.is_empty() {
            return Err("Feedback string is empty".to_string());
        }

        Ok(Self(classifications))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Absent, Correct, Present};

    #[test]
    fn feedback_from_str_valid() {
        let f1: Feedback = "GYG--".parse().unwrap();
        let f2: Feedback = "🟩🟨🟩⬛⬜".parse().unwrap();
        let f3: Feedback = "gyg__".parse().unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(
            f1.classifications(),
            &[Correct, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn feedback_from_str_invalid() {
        assert!("GXGGY".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_counts() {
        let feedback: Feedback = "YGGYY".parse().unwrap();
        assert_eq!(feedback.count_correct(), 2);
        assert_eq!(feedback.count_present(), 3);
        assert!(!feedback.is_all_correct());
    }

    #[test]
    fn feedback_all_correct() {
        let feedback: Feedback = "GGGGG".parse().unwrap();
        assert!(feedback.is_all_correct());
        assert_eq!(feedback.len(), 5);
    }

    #[test]
    fn feedback_other_widths() {
        let feedback: Feedback = "GYG".parse().unwrap();
        assert_eq!(feedback.len(), 3);
        assert_eq!(feedback.to_emoji(), "🟩🟨🟩");
    }

    #[test]
    fn empty_is_default_classification() {
        assert_eq!(Classification::default(), Classification::Empty);
    }
}
