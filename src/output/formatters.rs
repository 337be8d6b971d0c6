//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, Word};
use crate::game::{Row, Tile, TileState};
use colored::{ColoredString, Colorize};

/// Plain text for a tile: the uppercase letter, or `_` when empty
#[must_use]
pub fn tile_text(tile: &Tile) -> String {
    tile.letter()
        .map_or_else(|| "_".to_string(), |letter| letter.to_string())
}

/// A tile as a colored cell
#[must_use]
pub fn tile_cell(tile: &Tile) -> ColoredString {
    let text = format!(" {} ", tile_text(tile));
    match tile.state() {
        TileState::Empty => text.bright_black(),
        TileState::Occupied => text.bright_white().bold(),
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black(),
    }
}

/// A row of colored cells
#[must_use]
pub fn row_line(row: &Row) -> String {
    row.tiles().iter().map(|tile| tile_cell(tile).to_string()).collect()
}

/// A guess with its feedback as colored cells, outside of any session
#[must_use]
pub fn feedback_line(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.classifications())
        .map(|(letter, class)| {
            let text = format!(" {letter} ");
            let cell = match class {
                Classification::Correct => text.black().on_green().bold(),
                Classification::Present => text.black().on_yellow().bold(),
                Classification::Absent => text.white().on_bright_black(),
                Classification::Empty => text.bright_white(),
            };
            cell.to_string()
        })
        .collect()
}

/// Emoji grid of every evaluated row, as shared after a game
#[must_use]
pub fn share_grid(rows: &[Row]) -> String {
    rows.iter()
        .filter(|row| row.is_evaluated())
        .map(|row| {
            row.tiles()
                .iter()
                .map(|tile| tile.classification().emoji())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
