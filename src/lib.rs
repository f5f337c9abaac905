// Library interface for wordle
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod feedback;
pub mod game;
pub mod logging;
pub mod round;
pub mod secret;
pub mod tui;
pub mod wordbank;

/// Number of letters in every secret word and guess.
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets before the round is lost.
pub const MAX_ATTEMPTS: usize = 6;

// Re-export commonly used items for easier testing
pub use error::GameError;
pub use feedback::{FeedbackRow, LetterMark, SecretWord, score};
pub use game::{GameInterface, UserAction, game_loop};
pub use round::{Attempt, Round, RoundState};
pub use secret::{FixedSecret, RandomSecret, SecretSource};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
