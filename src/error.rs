use thiserror::Error;

/// Errors surfaced by the game core.
///
/// None of these are recovered internally; every violation is reported to
/// the caller as a distinguishable value. Re-prompting the player is the
/// front-end's job.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess length does not match the secret word length.
    #[error("guess must be exactly {expected} letters, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },

    /// A candidate secret word failed validation.
    #[error("'{word}' is not a playable secret word")]
    InvalidWordLength { word: String },

    /// A guess was submitted after the round reached Won or Lost.
    #[error("round is already finished")]
    RoundAlreadyFinished,

    /// The wordbank has no usable words to select a secret from.
    #[error("wordbank contains no usable words")]
    EmptyWordbank,
}
