//! Feedback scoring for guesses against the secret word.
//!
//! This module handles classifying each guess letter as an exact match
//! (green), present elsewhere (yellow), or absent (gray). Scoring runs in
//! two passes so that duplicate letters are marked correctly: each secret
//! letter satisfies at most one mark.

use crate::{GameError, WORD_LENGTH};
use std::fmt;

/// Classification of a single guess letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMark {
    /// Correct letter in the correct position (green)
    Exact,
    /// Letter occurs elsewhere in the secret (yellow)
    Present,
    /// Letter does not occur in the secret, or every occurrence is already
    /// claimed by another mark (gray)
    Absent,
}

impl LetterMark {
    /// Single-character display form: G, Y, or X.
    pub fn to_char(self) -> char {
        match self {
            LetterMark::Exact => 'G',
            LetterMark::Present => 'Y',
            LetterMark::Absent => 'X',
        }
    }
}

/// The word a round is played against.
///
/// Construction trims, uppercases, and rejects anything that is not exactly
/// [`WORD_LENGTH`] ASCII letters, so a held `SecretWord` is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord(String);

impl SecretWord {
    pub fn new(word: impl Into<String>) -> Result<Self, GameError> {
        let word = word.into().trim().to_uppercase();
        if word.len() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidWordLength { word });
        }
        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-position marks for one scored guess, in guess order.
///
/// Produced fresh by [`score`] and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackRow([LetterMark; WORD_LENGTH]);

impl FeedbackRow {
    pub fn marks(&self) -> &[LetterMark; WORD_LENGTH] {
        &self.0
    }

    /// True when every mark is [`LetterMark::Exact`], i.e. the guess was
    /// the secret.
    pub fn is_winning(&self) -> bool {
        self.0.iter().all(|m| *m == LetterMark::Exact)
    }
}

impl fmt::Display for FeedbackRow {
    /// Renders as a five-character string like "GYXXG".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

/// Score a guess against the secret.
///
/// First pass marks exact matches and counts the secret's remaining
/// unmatched letters. Second pass spends those counts on misplaced
/// letters, left to right; once a letter's count is exhausted the rest of
/// its occurrences in the guess are marked absent.
///
/// # Errors
/// Returns [`GameError::InvalidGuessLength`] when the guess is not exactly
/// [`WORD_LENGTH`] letters; the input layer validates before submitting.
pub fn score(secret: &SecretWord, guess: &str) -> Result<FeedbackRow, GameError> {
    if guess.len() != WORD_LENGTH {
        return Err(GameError::InvalidGuessLength {
            expected: WORD_LENGTH,
            actual: guess.len(),
        });
    }

    let guess_bytes = guess.as_bytes();
    let secret_bytes = secret.as_str().as_bytes();

    let mut marks = [LetterMark::Absent; WORD_LENGTH];
    let mut remaining = [0u8; 26];

    for i in 0..WORD_LENGTH {
        if guess_bytes[i].to_ascii_uppercase() == secret_bytes[i] {
            marks[i] = LetterMark::Exact;
        } else {
            remaining[(secret_bytes[i] - b'A') as usize] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if marks[i] != LetterMark::Exact {
            // Out-of-range slots (non-letter bytes) never match a count.
            let slot = guess_bytes[i].to_ascii_uppercase().wrapping_sub(b'A') as usize;
            if slot < 26 && remaining[slot] > 0 {
                marks[i] = LetterMark::Present;
                remaining[slot] -= 1;
            }
        }
    }

    Ok(FeedbackRow(marks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(word: &str) -> SecretWord {
        SecretWord::new(word).unwrap()
    }

    fn mark_counts_for(row: &FeedbackRow, guess: &str, letter: char) -> usize {
        row.marks()
            .iter()
            .zip(guess.chars())
            .filter(|(m, c)| *c == letter && !matches!(m, LetterMark::Absent))
            .count()
    }

    #[test]
    fn test_guessing_the_secret_is_all_exact() {
        let row = score(&secret("CRANE"), "CRANE").unwrap();
        assert!(row.is_winning());
        assert_eq!(row.marks(), &[LetterMark::Exact; 5]);
    }

    #[test]
    fn test_disjoint_letters_are_all_absent() {
        let row = score(&secret("CRANE"), "MOIST").unwrap();
        assert!(!row.is_winning());
        assert_eq!(row.marks(), &[LetterMark::Absent; 5]);
    }

    #[test]
    fn test_positional_scoring_crane_vs_crone() {
        // O is the only letter not in the secret; everything else matches
        // its position.
        let row = score(&secret("CRANE"), "CRONE").unwrap();
        assert_eq!(
            row.marks(),
            &[
                LetterMark::Exact,
                LetterMark::Exact,
                LetterMark::Absent,
                LetterMark::Exact,
                LetterMark::Exact,
            ]
        );
    }

    #[test]
    fn test_misplaced_letter_is_present() {
        let row = score(&secret("CRANE"), "NASTY").unwrap();
        assert_eq!(row.marks()[0], LetterMark::Present); // N occurs at position 3
        assert_eq!(row.marks()[1], LetterMark::Present); // A occurs at position 2
        assert_eq!(row.marks()[2], LetterMark::Absent);
        assert_eq!(row.marks()[3], LetterMark::Absent);
        assert_eq!(row.marks()[4], LetterMark::Absent);
    }

    #[test]
    fn test_duplicate_guess_letters_limited_by_secret() {
        // Secret ALLOY holds two L's; LOLLY guesses three. Only two may be
        // marked, the third L is absent.
        let row = score(&secret("ALLOY"), "LOLLY").unwrap();
        assert_eq!(mark_counts_for(&row, "LOLLY", 'L'), 2);

        // L at position 2 lines up exactly; the first L is misplaced, the
        // fourth has no secret L left to claim.
        assert_eq!(row.marks()[0], LetterMark::Present);
        assert_eq!(row.marks()[2], LetterMark::Exact);
        assert_eq!(row.marks()[3], LetterMark::Absent);
    }

    #[test]
    fn test_exact_match_consumes_before_present() {
        // Secret has a single A, matched exactly at position 2. The other
        // A in the guess must not be reported as present.
        let row = score(&secret("CRANE"), "ARACE").unwrap();
        let a_marks = mark_counts_for(&row, "ARACE", 'A');
        assert_eq!(a_marks, 1);
        assert_eq!(row.marks()[2], LetterMark::Exact);
        assert_eq!(row.marks()[0], LetterMark::Absent);
    }

    #[test]
    fn test_marks_never_exceed_secret_occurrences() {
        let cases = [
            ("SPEED", "ERASE"),
            ("ALLOY", "LLLLL"),
            ("CREEP", "GEESE"),
            ("BANAL", "ANNAL"),
            ("CRANE", "CRANE"),
        ];
        for (s, g) in cases {
            let sec = secret(s);
            let row = score(&sec, g).unwrap();
            for letter in 'A'..='Z' {
                let marked = mark_counts_for(&row, g, letter);
                let available = s.chars().filter(|c| *c == letter).count();
                assert!(
                    marked <= available,
                    "secret {s}, guess {g}: letter {letter} marked {marked} times but occurs {available} times"
                );
            }
        }
    }

    #[test]
    fn test_lowercase_guess_is_normalized() {
        let row = score(&secret("CRANE"), "crane").unwrap();
        assert!(row.is_winning());
    }

    #[test]
    fn test_wrong_length_guess_is_rejected() {
        let err = score(&secret("CRANE"), "CRANES").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuessLength {
                expected: 5,
                actual: 6
            }
        );
        assert!(score(&secret("CRANE"), "CRAN").is_err());
        assert!(score(&secret("CRANE"), "").is_err());
    }

    #[test]
    fn test_row_display_uses_feedback_alphabet() {
        let row = score(&secret("CRANE"), "CRONE").unwrap();
        assert_eq!(row.to_string(), "GGXGG");

        let row = score(&secret("CRANE"), "NASTY").unwrap();
        assert_eq!(row.to_string(), "YYXXX");
    }

    #[test]
    fn test_secret_word_validation() {
        assert!(SecretWord::new("CRANE").is_ok());
        assert!(SecretWord::new("crane").is_ok());
        assert_eq!(SecretWord::new("  crane  ").unwrap().as_str(), "CRANE");
        assert!(SecretWord::new("CRAN").is_err());
        assert!(SecretWord::new("CRANES").is_err());
        assert!(SecretWord::new("CR4NE").is_err());
        assert!(SecretWord::new("").is_err());
    }
}
