//! Dictionary and document loading. Thin collaborators around the core:
//! their whole contract is to hand the checker ordered sequences of
//! lowercase words within the configured limits.

use std::fs;
use std::path::Path;

use crate::config::CheckerConfig;
use crate::error::Error;

/// Punctuation that separates tokens, on top of ordinary whitespace.
/// Includes the curly apostrophe.
const TOKEN_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?', '"', '’'];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || TOKEN_PUNCTUATION.contains(&c)
}

/// Clamps a word to at most `max` bytes without splitting a character.
fn clamp_len(word: &mut String, max: usize) {
    if word.len() <= max {
        return;
    }
    let mut cut = max;
    while !word.is_char_boundary(cut) {
        cut -= 1;
    }
    word.truncate(cut);
}

/// Splits `text` into lowercase tokens on whitespace and the fixed
/// punctuation set, discarding empty tokens. Stops at `max_words` tokens;
/// each token is clamped to `max_word_len` bytes.
pub fn tokenize(text: &str, max_words: usize, max_word_len: usize) -> Vec<String> {
    let mut words = Vec::new();
    for token in text.split(is_delimiter) {
        if token.is_empty() {
            continue;
        }
        if words.len() == max_words {
            break;
        }
        let mut word = token.to_lowercase();
        clamp_len(&mut word, max_word_len);
        words.push(word);
    }
    words
}

/// Loads a dictionary file, one word per line: lowercased, trailing line
/// terminators stripped, blank lines skipped. Stops accepting entries at
/// `config.max_dict_words`.
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    config: &CheckerConfig,
) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut words = Vec::new();
    for line in content.lines() {
        if line.is_empty() {
            continue;
        }
        if words.len() == config.max_dict_words {
            break;
        }
        let mut word = line.to_lowercase();
        clamp_len(&mut word, config.max_word_len);
        words.push(word);
    }
    Ok(words)
}

/// Reads a document and tokenizes it under the configured limits.
pub fn load_document<P: AsRef<Path>>(
    path: P,
    config: &CheckerConfig,
) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(tokenize(&content, config.max_input_words, config.max_word_len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        let words = tokenize("Hello, world! It’s a test: done.", 100, 50);
        assert_eq!(words, ["hello", "world", "it", "s", "a", "test", "done"]);
    }

    #[test]
    fn newlines_separate_tokens() {
        let words = tokenize("one\ntwo\r\nthree", 100, 50);
        assert_eq!(words, ["one", "two", "three"]);
    }

    #[test]
    fn empty_tokens_are_discarded() {
        assert!(tokenize("  ,, .. !! ", 100, 50).is_empty());
        assert!(tokenize("", 100, 50).is_empty());
    }

    #[test]
    fn stops_at_max_words() {
        let words = tokenize("a b c d e", 3, 50);
        assert_eq!(words, ["a", "b", "c"]);
    }

    #[test]
    fn long_tokens_are_clamped() {
        let words = tokenize("abcdefgh", 10, 4);
        assert_eq!(words, ["abcd"]);
    }

    #[test]
    fn clamp_respects_char_boundaries() {
        let mut word = String::from("héllo");
        clamp_len(&mut word, 2);
        assert_eq!(word, "h");
    }

    #[test]
    fn dictionary_load_lowercases_and_skips_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Apple\n\nBanana\ncherry\n").unwrap();

        let words = load_dictionary(file.path(), &CheckerConfig::default()).unwrap();
        assert_eq!(words, ["apple", "banana", "cherry"]);
    }

    #[test]
    fn dictionary_load_stops_at_capacity() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a\nb\nc\nd\n").unwrap();

        let config = CheckerConfig {
            max_dict_words: 2,
            ..CheckerConfig::default()
        };
        let words = load_dictionary(file.path(), &config).unwrap();
        assert_eq!(words, ["a", "b"]);
    }

    #[test]
    fn missing_dictionary_is_an_io_error() {
        let err = load_dictionary("/no/such/words.txt", &CheckerConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
