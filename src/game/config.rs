//! Session configuration

use super::SessionError;

/// Board dimensions for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Letters per word (W)
    pub word_length: usize,
    /// Rows available (R)
    pub max_attempts: usize,
}

impl SessionConfig {
    pub const DEFAULT_WORD_LENGTH: usize = 5;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }

    /// Reject a board with no columns or no rows
    ///
    /// # Errors
    /// Returns `SessionError::InvalidConfig` if either dimension is zero.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.word_length == 0 {
            return Err(SessionError::InvalidConfig(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(SessionError::InvalidConfig(
                "max attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WORD_LENGTH, Self::DEFAULT_MAX_ATTEMPTS)
    }
}
