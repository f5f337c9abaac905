use crate::game::{GameInterface, UserAction};
use crate::round::Attempt;
use crate::{GameError, WORD_LENGTH, debug_log};
use clap::Parser;
use std::io::BufRead;

/// Wordle CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Play in the full-screen terminal UI instead of line mode
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Line-oriented front-end reading from any [`BufRead`] source, so tests
/// can script a whole game through a `Cursor`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!(
            "\nEnter your guess ({WORD_LENGTH} letters, or 'exit' to quit, or 'next' to start a new game):"
        );
        let mut input = String::new();
        let Ok(bytes) = self.reader.read_line(&mut input) else {
            return Some(UserAction::Exit);
        };
        if bytes == 0 {
            // End of input means nobody is left to prompt.
            debug_log!("input stream exhausted, exiting");
            return Some(UserAction::Exit);
        }
        let input = input.trim().to_uppercase();

        match input.as_str() {
            "EXIT" => Some(UserAction::Exit),
            "NEXT" => Some(UserAction::NewGame),
            _ if is_valid_word(&input) => Some(UserAction::Guess(input)),
            _ => {
                println!("Invalid word. Please enter {WORD_LENGTH} letters.");
                None
            }
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_guess(&mut self) -> Option<UserAction> {
        self.read_action()
    }

    fn display_new_round(&mut self, max_attempts: usize) {
        println!("New round started. You have {max_attempts} attempts to find the word.");
    }

    fn display_board(&mut self, history: &[Attempt]) {
        println!("Current board:");
        for (i, attempt) in history.iter().enumerate() {
            println!(
                "Guess {}: {}   Result: {}",
                i + 1,
                attempt.guess,
                attempt.row
            );
        }
        println!();
    }

    fn display_invalid_guess(&mut self, error: &GameError) {
        println!("{error}");
    }

    fn display_win(&mut self, attempts_used: usize) {
        println!("Congratulations! You guessed the word in {attempts_used} attempts.");
    }

    fn display_loss(&mut self, secret: &str) {
        println!("Sorry, you did not guess the word.");
        println!("The secret word was: {secret}");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
