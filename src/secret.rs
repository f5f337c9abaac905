//! Secret selection for new rounds.
//!
//! Random choice is the one non-deterministic piece of the game, so it
//! lives behind a trait; tests inject [`FixedSecret`] and get fully
//! deterministic transcripts.

use crate::GameError;
use crate::feedback::SecretWord;
use rand::Rng;

/// Supplies the secret word for each new round.
pub trait SecretSource {
    /// Produce the secret for the next round.
    ///
    /// # Errors
    /// [`GameError::EmptyWordbank`] when there is nothing to pick from, or
    /// [`GameError::InvalidWordLength`] when the selected word fails
    /// validation.
    fn provide_secret(&mut self) -> Result<SecretWord, GameError>;
}

/// Draws a uniformly random secret from an owned wordbank.
pub struct RandomSecret {
    words: Vec<String>,
}

impl RandomSecret {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl SecretSource for RandomSecret {
    fn provide_secret(&mut self) -> Result<SecretWord, GameError> {
        if self.words.is_empty() {
            return Err(GameError::EmptyWordbank);
        }
        let index = rand::thread_rng().gen_range(0..self.words.len());
        SecretWord::new(self.words[index].as_str())
    }
}

/// Always yields the same secret. The injection point for tests and
/// scripted games.
pub struct FixedSecret(SecretWord);

impl FixedSecret {
    pub fn new(secret: SecretWord) -> Self {
        Self(secret)
    }
}

impl SecretSource for FixedSecret {
    fn provide_secret(&mut self) -> Result<SecretWord, GameError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_comes_from_the_wordbank() {
        let words = vec![
            "CRANE".to_string(),
            "SLATE".to_string(),
            "RAISE".to_string(),
        ];
        let mut source = RandomSecret::new(words.clone());
        for _ in 0..20 {
            let secret = source.provide_secret().unwrap();
            assert!(words.contains(&secret.as_str().to_string()));
        }
    }

    #[test]
    fn test_empty_wordbank_is_an_error() {
        let mut source = RandomSecret::new(Vec::new());
        assert_eq!(
            source.provide_secret().unwrap_err(),
            GameError::EmptyWordbank
        );
    }

    #[test]
    fn test_malformed_wordbank_entry_surfaces_as_error() {
        // A wordbank that bypassed loading validation must still not
        // produce an invalid secret.
        let mut source = RandomSecret::new(vec!["TOOLONG".to_string()]);
        assert!(matches!(
            source.provide_secret().unwrap_err(),
            GameError::InvalidWordLength { .. }
        ));
    }

    #[test]
    fn test_fixed_secret_is_deterministic() {
        let mut source = FixedSecret::new(SecretWord::new("CRANE").unwrap());
        assert_eq!(source.provide_secret().unwrap().as_str(), "CRANE");
        assert_eq!(source.provide_secret().unwrap().as_str(), "CRANE");
    }
}
