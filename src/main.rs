//! Wordle - CLI
//!
//! Play Wordle in the terminal, or check how a guess scores against a word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{check_guess, run_play},
    game::SessionConfig,
    logging::setup_logging,
    output::print_evaluation,
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle in the terminal, with exact duplicate-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solutions word list (one word per line); defaults to the bundled list
    #[arg(long, global = true, requires = "allowed")]
    solutions: Option<PathBuf>,

    /// Valid guesses word list (one word per line); defaults to the bundled list
    #[arg(long, global = true, requires = "solutions")]
    allowed: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Letters per word
        #[arg(short, long, default_value_t = SessionConfig::DEFAULT_WORD_LENGTH)]
        length: usize,

        /// Number of guesses allowed
        #[arg(short, long, default_value_t = SessionConfig::DEFAULT_MAX_ATTEMPTS)]
        attempts: usize,

        /// Seed for picking secrets (reproducible games)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the feedback a guess gets against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },
}

/// Load word lists from the given files, or the bundled lists if none given
fn load_wordlists(solutions: Option<&Path>, allowed: Option<&Path>) -> Result<WordLists> {
    match (solutions, allowed) {
        (Some(solutions), Some(allowed)) => WordLists::from_files(solutions, allowed)
            .context("Failed to load word lists"),
        _ => WordLists::embedded().context("Bundled word lists are corrupt"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let lists = load_wordlists(cli.solutions.as_deref(), cli.allowed.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: SessionConfig::DEFAULT_WORD_LENGTH,
        attempts: SessionConfig::DEFAULT_MAX_ATTEMPTS,
        seed: None,
    });

    match command {
        Commands::Play {
            length,
            attempts,
            seed,
        } => {
            let config = SessionConfig::new(length, attempts);
            let mut rng = seed
                .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
            run_play(&lists, config, &mut rng)
        }
        Commands::Check { secret, guess } => {
            let result = check_guess(&secret, &guess, &lists)?;
            print_evaluation(&result.secret, &result.guess, &result.feedback);
            if !result.guess_is_valid {
                println!("\n   (note: {} is not in the valid-guess list)", result.guess);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_accepts_session_options() {
        let cli = Cli::try_parse_from([
            "wordle", "play", "--length", "6", "-a", "8", "--seed", "3",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Play {
                length: 6,
                attempts: 8,
                seed: Some(3)
            })
        ));
    }

    #[test]
    fn play_defaults_match_session_defaults() {
        let cli = Cli::try_parse_from(["wordle", "play"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Play {
                length: SessionConfig::DEFAULT_WORD_LENGTH,
                attempts: SessionConfig::DEFAULT_MAX_ATTEMPTS,
                seed: None
            })
        ));
    }

    #[test]
    fn check_rejects_session_options() {
        for flag in ["--length", "--attempts", "--seed"] {
            let parsed = Cli::try_parse_from(["wordle", "check", "crane", "slate", flag, "6"]);
            assert!(parsed.is_err(), "check should not accept {flag}");
        }
    }

    #[test]
    fn word_list_options_stay_global() {
        let cli = Cli::try_parse_from([
            "wordle",
            "check",
            "crane",
            "slate",
            "--solutions",
            "s.txt",
            "--allowed",
            "a.txt",
        ])
        .unwrap();
        assert_eq!(cli.solutions.as_deref(), Some(Path::new("s.txt")));
        assert!(matches!(cli.command, Some(Commands::Check { .. })));
    }
}
