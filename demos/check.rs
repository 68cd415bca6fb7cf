use std::env;
use std::process;

use parspell::{CheckerConfig, SpellChecker, load_document};

fn main() {
    let mut args = env::args().skip(1);
    let dict_path = args.next().unwrap_or_else(|| "words.txt".into());
    let input_path = args.next().unwrap_or_else(|| "input.txt".into());

    let config = CheckerConfig::default();

    let checker = match SpellChecker::from_word_list_file(&dict_path, config.clone()) {
        Ok(checker) => checker,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    println!(
        "Loaded {} words from the dictionary.",
        checker.lexicon().len()
    );

    let words = match load_document(&input_path, &config) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    println!("Loaded {} words from the input document.", words.len());

    let report = checker.check_words(&words);
    println!();
    print!("{report}");
}
