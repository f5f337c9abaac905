use crate::WORD_LENGTH;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn is_playable(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| is_playable(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_uppercase();
        if is_playable(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_normalizes_and_filters() {
        let data = "crane\n  slate  \ntoolong\ncat\ncr4ne\n\nRAISE";
        let words = load_wordbank_from_str(data);
        assert_eq!(words, vec!["CRANE", "SLATE", "RAISE"]);
    }

    #[test]
    fn test_embedded_wordbank_is_usable() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| w.len() == WORD_LENGTH));
        assert!(
            words
                .iter()
                .all(|w| w.chars().all(|c| c.is_ascii_uppercase()))
        );
    }

    #[test]
    fn test_load_from_file_round_trip() {
        use std::io::Write;

        let path = std::env::temp_dir().join("wordle_test_wordbank.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "apple").unwrap();
            writeln!(file, "grape").unwrap();
            writeln!(file, "not-a-word").unwrap();
        }

        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words, vec!["APPLE", "GRAPE"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(load_wordbank_from_file("/definitely/not/here.txt").is_err());
    }
}
