//! Board tiles and rows
//!
//! Tiles carry no logic of their own; only the session mutates them.

use crate::core::{Classification, Feedback, Letter, Word};

/// What the presentation layer should draw for a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    /// No letter
    Empty,
    /// Letter typed, row not evaluated yet
    Occupied,
    Correct,
    Present,
    Absent,
}

/// One letter cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    letter: Option<Letter>,
    classification: Classification,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<Letter> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.classification
    }

    /// Display state derived from letter and classification
    #[must_use]
    pub const fn state(&self) -> TileState {
        match (self.letter, self.classification) {
            (None, _) => TileState::Empty,
            (Some(_), Classification::Empty) => TileState::Occupied,
            (Some(_), Classification::Correct) => TileState::Correct,
            (Some(_), Classification::Present) => TileState::Present,
            (Some(_), Classification::Absent) => TileState::Absent,
        }
    }

    pub(crate) const fn set_letter(&mut self, letter: Letter) {
        self.letter = Some(letter);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) const fn set_classification(&mut self, classification: Classification) {
        self.classification = classification;
    }
}

/// A row of exactly `width` tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    tiles: Vec<Tile>,
}

impl Row {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            tiles: vec![Tile::default(); width],
        }
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.tiles.len()
    }

    /// A row is complete when every tile holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(|tile| tile.letter.is_some())
    }

    /// Whether feedback has been written to this row
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.classification != Classification::Empty)
    }

    /// The guess formed by a complete row
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let letters = self
            .tiles
            .iter()
            .map(|tile| tile.letter)
            .collect::<Option<Vec<_>>>()?;
        Word::from_letters(&letters)
    }

    /// Letters typed so far, lowercase, for echoing partial input
    #[must_use]
    pub fn typed(&self) -> String {
        self.tiles
            .iter()
            .map_while(|tile| tile.letter.map(Letter::as_char))
            .collect()
    }

    pub(crate) fn tile_mut(&mut self, column: usize) -> &mut Tile {
        &mut self.tiles[column]
    }

    pub(crate) fn apply_feedback(&mut self, feedback: &Feedback) {
        for (tile, &class) in self.tiles.iter_mut().zip(feedback.classifications()) {
            tile.set_classification(class);
        }
    }
}
