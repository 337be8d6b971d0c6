//! Word list parsing
//!
//! Word lists are newline-delimited text, one word per line, in any case and
//! with optional surrounding whitespace.

use super::{DataLoadError, ListKind};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Parse a word list source into words
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns `DataLoadError::InvalidEntry` for a line that is not made of ASCII
/// letters, and `DataLoadError::EmptySource` if no words remain.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::{ListKind, loader::parse_words};
///
/// let words = parse_words("Crane\n  slate \n\n", ListKind::Solutions).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
/// ```
pub fn parse_words(source: &str, list: ListKind) -> Result<Vec<Word>, DataLoadError> {
    let mut words = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|_| DataLoadError::InvalidEntry {
            list,
            line: index + 1,
            entry: trimmed.to_string(),
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(DataLoadError::EmptySource(list));
    }

    Ok(words)
}

/// Read a word list file into a string
///
/// # Errors
///
/// Returns `DataLoadError::Io` if the file cannot be read.
pub fn read_source<P: AsRef<Path>>(path: P, list: ListKind) -> Result<String, DataLoadError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        list,
        path: path.to_path_buf(),
        source,
    })
}
