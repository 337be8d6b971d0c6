//! Interactive play mode
//!
//! Line-based host for a game session. Each line is turned into input events:
//! letters type, `<` erases, and the end of the line submits.

use crate::game::{GameSession, InputEvent, MoveRejected, SessionConfig};
use crate::output::{print_board, print_event, print_summary};
use crate::wordlists::WordLists;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Translate one line of user input into session input
///
/// Whitespace is ignored, `<` is a backspace, anything else is typed as-is
/// (the session rejects non-letters). The line always ends with a submit.
///
/// # Examples
/// ```
/// use wordle_game::commands::play::parse_line;
/// use wordle_game::game::InputEvent;
///
/// assert_eq!(
///     parse_line("ab<"),
///     vec![
///         InputEvent::Letter('a'),
///         InputEvent::Letter('b'),
///         InputEvent::Backspace,
///         InputEvent::Submit,
///     ]
/// );
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Vec<InputEvent> {
    line.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            '<' => InputEvent::Backspace,
            other => InputEvent::Letter(other),
        })
        .chain(std::iter::once(InputEvent::Submit))
        .collect()
}

/// Run the interactive game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if no secret of the configured width
/// can be drawn.
pub fn run_play<R: Rng + ?Sized>(
    lists: &WordLists,
    config: SessionConfig,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║                W O R D L E                   ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_attempts
    );
    println!("Type letters and press Enter. '<' erases a letter.");
    println!("Commands: ':new' for a new word, ':quit' to exit\n");

    let mut session =
        GameSession::new(lists, config, rng).context("Failed to start a game session")?;
    print_board(&session);

    while let Some(line) = get_user_input("Guess")? {
        match line.as_str() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                session = session.restart(rng)?;
                println!("\n🔄 New game started!");
                print_board(&session);
                continue;
            }
            _ => {}
        }

        for input in parse_line(&line) {
            match session.handle_input(input) {
                Ok(events) => events.iter().for_each(print_event),
                // Short rows just stay on the board for the next line
                Err(MoveRejected::RowIncomplete) => {}
                Err(reason) => println!("{}", format!("  {reason}").bright_black()),
            }
        }

        print_board(&session);

        if session.is_over() {
            print_summary(&session);

            let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
            if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                break;
            }
            session = session.restart(rng)?;
            println!("\n🔄 New game started!");
            print_board(&session);
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` once stdin is closed
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
