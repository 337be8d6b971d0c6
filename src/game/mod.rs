//! Game session: board, cursor, and win/loss flow
//!
//! Drives the evaluator and word lists from a stream of normalized input.

mod config;
mod session;
mod tile;

pub use config::SessionConfig;
pub use session::{GameSession, GameStatus, InputEvent, MoveRejected, SessionError, SessionEvent};
pub use tile::{Row, Tile, TileState};
