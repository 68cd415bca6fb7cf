//! Parallel spell checking against a sorted word dictionary.
//!
//! A [`SpellChecker`] classifies input words as known or misspelled with a
//! chunked parallel scan over the input, then ranks correction candidates
//! for each misspelled word with a chunked parallel scan over the
//! dictionary, pruning by length difference before computing Levenshtein
//! distance. Both phases share one fixed-size worker pool.
//!
//! ```
//! use parspell::{CheckerConfig, SpellChecker};
//!
//! let dictionary = vec!["cat".to_string(), "cats".to_string(), "dog".to_string()];
//! let checker = SpellChecker::new(dictionary, CheckerConfig::default()).unwrap();
//!
//! let report = checker.check_text("the cta sat");
//! for entry in &report.misspelled {
//!     println!("{}: {:?}", entry.word, entry.suggestions);
//! }
//! ```

mod checker;
mod classify;
mod config;
mod distance;
mod error;
mod input;
mod lexicon;
mod partition;
mod suggest;

pub use checker::{CheckReport, SpellChecker, WordReport};
pub use config::CheckerConfig;
pub use distance::edit_distance;
pub use error::Error;
pub use input::{load_dictionary, load_document, tokenize};
pub use lexicon::Lexicon;
pub use suggest::Suggestion;
