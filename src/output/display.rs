//! Display functions for the board and session events

use super::formatters::{feedback_line, row_line, share_grid};
use crate::core::{Feedback, Word};
use crate::game::{GameSession, GameStatus, SessionEvent};
use colored::Colorize;

/// Print every row of the board
pub fn print_board(session: &GameSession<'_>) {
    println!();
    for row in session.rows() {
        println!("   {}", row_line(row));
    }
    println!();
}

/// Print the host-facing message for a session event
///
/// Letter edits are already visible on the board, so they print nothing.
pub fn print_event(event: &SessionEvent) {
    match event {
        SessionEvent::LetterTyped { .. } | SessionEvent::LetterErased { .. } => {}
        SessionEvent::InvalidWordRejected { word } => {
            println!(
                "{}",
                format!("❌ {word} is not in the word list").red().bold()
            );
        }
        SessionEvent::RowEvaluated { row, feedback } => {
            println!("Guess {}: {feedback}", row + 1);
        }
        SessionEvent::GameWon { attempts } => {
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!(
                "{}",
                "    🎉  W O R D   F O U N D !  🎉    ".bright_green().bold()
            );
            println!("{}", "═".repeat(50).bright_cyan());
            println!(
                "\n  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if *attempts == 1 { "guess" } else { "guesses" }
            );
        }
        SessionEvent::GameLost { secret } => {
            println!(
                "\n{} The word was {}",
                "Out of guesses.".red().bold(),
                secret.to_string().bright_yellow().bold()
            );
        }
    }
}

/// Print the emoji summary once a game has ended
pub fn print_summary(session: &GameSession<'_>) {
    let score = match session.status() {
        GameStatus::Won => session.attempts_used().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };
    println!("\n  {score}/{}", session.max_attempts());
    for line in share_grid(session.rows()).lines() {
        println!("  {line}");
    }
    println!();
}

/// Print the evaluation of a single guess
pub fn print_evaluation(secret: &Word, guess: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.to_string().bright_yellow().bold(),
        guess.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n   {}", feedback_line(guess, feedback));
    println!("   {feedback}");
    println!(
        "\n   {} correct, {} present",
        feedback.count_correct().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
}
