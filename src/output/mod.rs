//! Terminal output formatting
//!
//! Board and event printing for the command-line host.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation, print_event, print_summary};
