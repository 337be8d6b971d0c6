//! Embedded word lists
//!
//! Word lists compiled into the binary from `data/`.

/// Words that can be drawn as the secret
pub const SOLUTIONS: &str = include_str!("../../data/solutions.txt");

/// All words accepted as guesses (superset of `SOLUTIONS`)
pub const ALLOWED: &str = include_str!("../../data/allowed.txt");
