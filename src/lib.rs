//! Wordle Game
//!
//! The core of a Wordle-style game: duplicate-aware guess evaluation, word
//! lists, and a session state machine that a host drives with normalized input.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, evaluate};
//! use wordle_game::game::{GameSession, GameStatus, InputEvent};
//! use wordle_game::wordlists::WordLists;
//!
//! let lists = WordLists::load("crane\nslate", "crane\nslate\naudio").unwrap();
//! let mut session = GameSession::with_secret(&lists, Word::new("crane").unwrap(), 6).unwrap();
//!
//! for ch in "crane".chars() {
//!     session.handle_input(InputEvent::Letter(ch)).unwrap();
//! }
//! session.handle_input(InputEvent::Submit).unwrap();
//! assert_eq!(session.status(), GameStatus::Won);
//!
//! // The evaluator on its own
//! let feedback = evaluate(&Word::new("speed").unwrap(), &Word::new("erase").unwrap()).unwrap();
//! assert_eq!(feedback.to_emoji(), "🟨⬛⬛🟨🟨");
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
