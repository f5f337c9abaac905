//! Round state machine: attempt bookkeeping and win/loss termination.

use crate::feedback::{self, FeedbackRow, SecretWord};
use crate::{GameError, MAX_ATTEMPTS};

/// One scored guess in a round's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: String,
    pub row: FeedbackRow,
}

/// Where a round stands.
///
/// Transitions are monotonic: `InProgress` moves to `Won` or `Lost` and
/// terminal states absorb everything afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundState::Won | RoundState::Lost)
    }
}

/// A single game from secret selection to termination.
///
/// Owns the secret and an append-only history of scored attempts; each
/// submitted guess is scored by [`feedback::score`] and the round decides
/// whether play continues. Not safe for concurrent submission without
/// external serialization.
#[derive(Debug)]
pub struct Round {
    secret: SecretWord,
    history: Vec<Attempt>,
    state: RoundState,
}

impl Round {
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            state: RoundState::InProgress,
        }
    }

    /// Score one guess and advance the state machine.
    ///
    /// Every scored guess consumes exactly one attempt slot, whatever its
    /// outcome. A wrong-length guess is rejected before any slot is
    /// consumed.
    ///
    /// # Errors
    /// [`GameError::RoundAlreadyFinished`] once the round is Won or Lost
    /// (history is left untouched), or [`GameError::InvalidGuessLength`]
    /// from scoring.
    pub fn submit_guess(&mut self, guess: &str) -> Result<FeedbackRow, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::RoundAlreadyFinished);
        }

        let row = feedback::score(&self.secret, guess)?;
        self.history.push(Attempt {
            guess: guess.to_uppercase(),
            row,
        });

        if row.is_winning() {
            self.state = RoundState::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.state = RoundState::Lost;
        }

        Ok(row)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Attempts consumed so far. Always equals `history().len()`.
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// Read-only view of the scored attempts, oldest first.
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// The answer, for the reveal after a loss.
    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }
}
