use std::env;
use std::io::{self, Write};
use std::path::Path;

use parspell::{CheckerConfig, SpellChecker, tokenize};

fn main() -> io::Result<()> {
    let dict_path = env::args().nth(1).unwrap_or_else(|| "words.txt".into());

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {}", dict_path);
        std::process::exit(1);
    }

    let config = CheckerConfig::default();
    let checker = match SpellChecker::from_word_list_file(&dict_path, config.clone()) {
        Ok(checker) => checker,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!(
        "Spell-check REPL - dictionary: {} ({} words)\ntype text, :q to quit",
        dict_path,
        checker.lexicon().len()
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }

        for word in tokenize(&input, config.max_input_words, config.max_word_len) {
            if checker.lexicon().contains(&word) {
                continue;
            }
            let suggestions = checker.suggestions(&word);
            if suggestions.is_empty() {
                println!("  {}  ->  no suggestions found", word);
            } else {
                let words: Vec<String> = suggestions.into_iter().map(|s| s.word).collect();
                println!("  {}  ->  {}", word, words.join(", "));
            }
        }
    }
    Ok(())
}
