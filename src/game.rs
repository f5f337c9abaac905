//! Game orchestration: drives rounds against a front-end interface.
//!
//! The loop owns no scoring or rendering logic. It asks a [`SecretSource`]
//! for the answer, feeds player actions into a [`Round`], and tells the
//! [`GameInterface`] what happened.

use crate::round::{Attempt, Round, RoundState};
use crate::secret::SecretSource;
use crate::{GameError, MAX_ATTEMPTS, info_log};

/// What the player asked for at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Seam between the game loop and a front-end (CLI or TUI).
pub trait GameInterface {
    /// Block until the player produces an action. `None` means the input
    /// was invalid and has already been reported; the loop asks again.
    fn read_guess(&mut self) -> Option<UserAction>;

    fn display_new_round(&mut self, max_attempts: usize);
    fn display_board(&mut self, history: &[Attempt]);
    fn display_invalid_guess(&mut self, error: &GameError);
    fn display_win(&mut self, attempts_used: usize);
    fn display_loss(&mut self, secret: &str);
    fn display_exit_message(&mut self);
}

/// Play rounds until the player exits.
///
/// A rejected guess (wrong length, or submitted after the round ended) is
/// reported through the interface and does not consume an attempt; the
/// player is simply asked again. After a win or loss the round stays
/// terminal until the player starts a new game or quits.
///
/// # Errors
/// Propagates secret-selection failures; everything else is handled in the
/// loop.
pub fn game_loop<S, I>(secrets: &mut S, interface: &mut I) -> Result<(), GameError>
where
    S: SecretSource,
    I: GameInterface,
{
    let mut round = Round::new(secrets.provide_secret()?);
    interface.display_new_round(MAX_ATTEMPTS);

    loop {
        let Some(action) = interface.read_guess() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                return Ok(());
            }
            UserAction::NewGame => {
                round = Round::new(secrets.provide_secret()?);
                interface.display_new_round(MAX_ATTEMPTS);
            }
            UserAction::Guess(guess) => {
                info_log!("submitting guess '{}'", guess);
                match round.submit_guess(&guess) {
                    Ok(_row) => {
                        interface.display_board(round.history());
                        match round.state() {
                            RoundState::Won => interface.display_win(round.attempts_used()),
                            RoundState::Lost => interface.display_loss(round.secret()),
                            RoundState::InProgress => {}
                        }
                    }
                    Err(error) => interface.display_invalid_guess(&error),
                }
            }
        }
    }
}
