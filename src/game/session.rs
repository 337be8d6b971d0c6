//! Game session state machine
//!
//! A session owns the secret, the board, and the cursor. The host feeds it
//! normalized input and renders the events it returns. Won and Lost are
//! terminal; starting over means building a new session with [`GameSession::restart`].

use super::config::SessionConfig;
use super::tile::Row;
use crate::core::{Feedback, LengthMismatchError, Letter, Word, evaluate};
use crate::wordlists::WordLists;
use rand::Rng;
use thiserror::Error;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Normalized input from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Submit,
}

/// What changed, for the presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LetterTyped {
        row: usize,
        column: usize,
        letter: Letter,
    },
    LetterErased {
        row: usize,
        column: usize,
    },
    /// The completed row is not a legal guess; it stays editable
    InvalidWordRejected { word: Word },
    RowEvaluated { row: usize, feedback: Feedback },
    GameWon { attempts: usize },
    GameLost { secret: Word },
}

/// An input that does not apply in the current state
///
/// Rejected input leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("the game is over")]
    GameOver,
    #[error("the row is already full")]
    RowFull,
    #[error("nothing to erase")]
    RowEmpty,
    #[error("the row is not complete")]
    RowIncomplete,
    #[error("{0:?} is not a letter")]
    NotALetter(char),
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatchError),
}

/// A session could not be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid session configuration: {0}")]
    InvalidConfig(String),
    #[error("no solution word has {length} letters")]
    NoSolutions { length: usize },
}

/// One round of the game
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    lists: &'a WordLists,
    secret: Word,
    rows: Vec<Row>,
    row_index: usize,
    column_index: usize,
    status: GameStatus,
    last_submission_invalid: bool,
}

impl<'a> GameSession<'a> {
    /// Start a session with a secret drawn from the solutions
    ///
    /// # Errors
    /// Returns `SessionError` if the configuration is invalid or no solution
    /// has `config.word_length` letters.
    pub fn new<R: Rng + ?Sized>(
        lists: &'a WordLists,
        config: SessionConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let secret = lists
            .pick_random_solution_of_length(config.word_length, rng)
            .ok_or(SessionError::NoSolutions {
                length: config.word_length,
            })?
            .clone();

        Self::with_secret(lists, secret, config.max_attempts)
    }

    /// Start a session with a known secret
    ///
    /// The board width is the secret's length.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidConfig` if `max_attempts` is zero.
    pub fn with_secret(
        lists: &'a WordLists,
        secret: Word,
        max_attempts: usize,
    ) -> Result<Self, SessionError> {
        SessionConfig::new(secret.len(), max_attempts).validate()?;

        tracing::debug!(width = secret.len(), max_attempts, "session started");

        Ok(Self {
            lists,
            rows: (0..max_attempts).map(|_| Row::new(secret.len())).collect(),
            secret,
            row_index: 0,
            column_index: 0,
            status: GameStatus::InProgress,
            last_submission_invalid: false,
        })
    }

    /// Discard this session and start a fresh one on the same lists and board size
    ///
    /// # Errors
    /// Returns `SessionError::NoSolutions` if no solution fits the board width.
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, SessionError> {
        Self::new(self.lists, self.config(), rng)
    }

    /// Route one input event to the matching operation
    ///
    /// # Errors
    /// Returns `MoveRejected` if the input does not apply right now.
    pub fn handle_input(&mut self, input: InputEvent) -> Result<Vec<SessionEvent>, MoveRejected> {
        let result = match input {
            InputEvent::Letter(ch) => self.type_letter(ch).map(|event| vec![event]),
            InputEvent::Backspace => self.backspace().map(|event| vec![event]),
            InputEvent::Submit => self.submit_row(),
        };

        if let Err(reason) = &result {
            tracing::debug!(?input, %reason, "input rejected");
        }
        result
    }

    /// Write a letter at the cursor and move right
    ///
    /// # Errors
    /// Rejects input once the game is over, when the row is full, or for
    /// anything that is not an ASCII letter.
    pub fn type_letter(&mut self, ch: char) -> Result<SessionEvent, MoveRejected> {
        self.ensure_in_progress()?;
        if self.column_index >= self.width() {
            return Err(MoveRejected::RowFull);
        }
        let letter = Letter::from_char(ch).ok_or(MoveRejected::NotALetter(ch))?;

        let (row, column) = self.cursor();
        self.rows[row].tile_mut(column).set_letter(letter);
        self.column_index += 1;
        self.last_submission_invalid = false;

        Ok(SessionEvent::LetterTyped {
            row,
            column,
            letter,
        })
    }

    /// Erase the letter left of the cursor
    ///
    /// # Errors
    /// Rejects input once the game is over or when the row is empty.
    pub fn backspace(&mut self) -> Result<SessionEvent, MoveRejected> {
        self.ensure_in_progress()?;
        if self.column_index == 0 {
            return Err(MoveRejected::RowEmpty);
        }

        self.column_index -= 1;
        let (row, column) = self.cursor();
        self.rows[row].tile_mut(column).clear();
        self.last_submission_invalid = false;

        Ok(SessionEvent::LetterErased { row, column })
    }

    /// Submit the active row
    ///
    /// An illegal word yields `InvalidWordRejected` and leaves the row as is.
    /// A legal word is evaluated, then the game is won, lost, or moves on to
    /// the next row.
    ///
    /// # Errors
    /// Rejects input once the game is over or while the row is incomplete.
    pub fn submit_row(&mut self) -> Result<Vec<SessionEvent>, MoveRejected> {
        self.ensure_in_progress()?;
        if self.column_index < self.width() {
            return Err(MoveRejected::RowIncomplete);
        }

        let row = self.row_index;
        let guess = self.rows[row].word().ok_or(MoveRejected::RowIncomplete)?;

        self.last_submission_invalid = false;
        if !self.lists.is_valid_guess(&guess.text()) {
            tracing::debug!(guess = %guess, "guess not in word list");
            self.last_submission_invalid = true;
            return Ok(vec![SessionEvent::InvalidWordRejected { word: guess }]);
        }

        let feedback = evaluate(&self.secret, &guess)?;
        self.rows[row].apply_feedback(&feedback);

        let mut events = vec![SessionEvent::RowEvaluated { row, feedback }];

        if guess == self.secret {
            self.status = GameStatus::Won;
            let attempts = row + 1;
            tracing::info!(attempts, "game won");
            events.push(SessionEvent::GameWon { attempts });
            return Ok(events);
        }

        self.row_index += 1;
        self.column_index = 0;

        if self.row_index >= self.rows.len() {
            self.status = GameStatus::Lost;
            tracing::info!(secret = %self.secret, "game lost");
            events.push(SessionEvent::GameLost {
                secret: self.secret.clone(),
            });
        }

        Ok(events)
    }

    fn ensure_in_progress(&self) -> Result<(), MoveRejected> {
        if self.status == GameStatus::InProgress {
            Ok(())
        } else {
            Err(MoveRejected::GameOver)
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Letters per row (W)
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.secret.len()
    }

    /// Rows on the board (R)
    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        SessionConfig::new(self.width(), self.max_attempts())
    }

    /// Current (row, column); row equals `max_attempts()` once rows are exhausted
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row_index, self.column_index)
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows that have been evaluated
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.rows.iter().filter(|row| row.is_evaluated()).count()
    }

    /// Set after an illegal word was submitted, until the next keystroke
    #[inline]
    #[must_use]
    pub const fn last_submission_invalid(&self) -> bool {
        self.last_submission_invalid
    }

    /// The secret, for hosts that reveal it after the game
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}
