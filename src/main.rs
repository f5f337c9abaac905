use std::io;
use wordle::cli::{CliInterface, parse_cli};
use wordle::tui::TuiInterface;
use wordle::wordbank::EMBEDDED_WORDBANK;
use wordle::{RandomSecret, game_loop, load_wordbank_from_file, load_wordbank_from_str, logging};

fn main() {
    let cli = parse_cli();
    logging::init();

    let words = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };

    let mut secrets = RandomSecret::new(words);

    let result = if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&mut secrets, &mut interface),
            Err(e) => {
                eprintln!("Failed to start terminal UI: {e}");
                return;
            }
        }
    } else {
        println!("Loaded {} words.", secrets.word_count());
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut secrets, &mut interface)
    };

    if let Err(e) = result {
        eprintln!("{e}");
    }
}
