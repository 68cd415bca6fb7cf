use std::fmt;
use std::path::Path;

use crate::classify::classify;
use crate::config::CheckerConfig;
use crate::error::Error;
use crate::input::{load_dictionary, tokenize};
use crate::lexicon::Lexicon;
use crate::suggest::{Suggestion, suggest};

/// One misspelled word with its ranked suggestions. An empty suggestion
/// list means nothing in the dictionary was within the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport {
    pub word: String,
    pub suggestions: Vec<Suggestion>,
}

/// Result of checking one document. The counts make capacity truncation
/// observable: a capped dictionary or input shows up as a smaller
/// `dict_words` / `input_words` than the source held, and a capped
/// misspelled list as fewer entries than the document contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub dict_words: usize,
    pub input_words: usize,
    pub misspelled: Vec<WordReport>,
}

impl CheckReport {
    pub fn misspelled_count(&self) -> usize {
        self.misspelled.len()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=========================================")?;
        writeln!(f, "         SPELL CHECKER RESULTS")?;
        writeln!(f, "=========================================")?;
        writeln!(f, "Dictionary Words Loaded       : {}", self.dict_words)?;
        writeln!(f, "Input Document Words Loaded   : {}", self.input_words)?;
        writeln!(f, "Total Misspelled Words        : {}", self.misspelled_count())?;
        writeln!(f, "=========================================")?;

        for entry in &self.misspelled {
            writeln!(f)?;
            writeln!(f, "Misspelled Word         : {}", entry.word)?;
            if entry.suggestions.is_empty() {
                writeln!(f, "Correction Suggestions  : No suggestions found.")?;
            } else {
                let joined: Vec<&str> =
                    entry.suggestions.iter().map(|s| s.word.as_str()).collect();
                writeln!(f, "Correction Suggestions  : {}", joined.join(", "))?;
            }
        }
        Ok(())
    }
}

/// The checking pipeline: owns the lexicon, the configuration, and one
/// worker pool reused by both parallel phases.
pub struct SpellChecker {
    config: CheckerConfig,
    lexicon: Lexicon,
    pool: rayon::ThreadPool,
}

impl SpellChecker {
    /// Builds the lexicon (dictionary capped at `max_dict_words`, then
    /// sorted) and the worker pool.
    pub fn new(mut dictionary: Vec<String>, config: CheckerConfig) -> Result<Self, Error> {
        dictionary.truncate(config.max_dict_words);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers.max(1))
            .build()?;
        Ok(SpellChecker {
            lexicon: Lexicon::new(dictionary),
            config,
            pool,
        })
    }

    /// Loads a word-per-line dictionary file and builds a checker from it.
    pub fn from_word_list_file<P: AsRef<Path>>(
        path: P,
        config: CheckerConfig,
    ) -> Result<Self, Error> {
        let dictionary = load_dictionary(path, &config)?;
        Self::new(dictionary, config)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Classification phase: the words of `input` (at most
    /// `max_input_words` of them) that are absent from the lexicon, capped
    /// at `max_misspelled`. Order across worker chunks is unspecified.
    pub fn classify(&self, input: &[String]) -> Vec<String> {
        let input = &input[..input.len().min(self.config.max_input_words)];
        classify(&self.pool, input, &self.lexicon, self.config.max_misspelled)
    }

    /// Suggestion phase for one word: dictionary entries within
    /// `suggestion_threshold` edits, ranked by distance then alphabetically,
    /// at most `max_suggestions` of them.
    pub fn suggestions(&self, word: &str) -> Vec<Suggestion> {
        suggest(
            &self.pool,
            word,
            &self.lexicon,
            self.config.suggestion_threshold,
            self.config.max_suggestions,
        )
    }

    /// Full run over pre-tokenized words: classify, then suggest for each
    /// misspelled word in turn. Each suggestion call is internally parallel;
    /// the walk across misspelled words is sequential.
    pub fn check_words(&self, input: &[String]) -> CheckReport {
        let input = &input[..input.len().min(self.config.max_input_words)];
        let misspelled = classify(&self.pool, input, &self.lexicon, self.config.max_misspelled);

        let misspelled = misspelled
            .into_iter()
            .map(|word| {
                let suggestions = self.suggestions(&word);
                WordReport { word, suggestions }
            })
            .collect();

        CheckReport {
            dict_words: self.lexicon.len(),
            input_words: input.len(),
            misspelled,
        }
    }

    /// Tokenizes raw text under the configured limits, then `check_words`.
    pub fn check_text(&self, text: &str) -> CheckReport {
        let words = tokenize(text, self.config.max_input_words, self.config.max_word_len);
        self.check_words(&words)
    }
}
