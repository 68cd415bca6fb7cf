use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Tunable limits and knobs for a checking run. Defaults match the classic
/// dictionary-file workload; every field can be overridden in code or from a
/// JSON file (missing fields keep their defaults).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Dictionary entries accepted before loading stops.
    pub max_dict_words: usize,
    /// Per-word byte cap; longer tokens are clamped at load time.
    pub max_word_len: usize,
    /// Input tokens accepted before tokenizing stops.
    pub max_input_words: usize,
    /// Capacity of the misspelled-word list; further hits are dropped.
    pub max_misspelled: usize,
    /// Maximum edit distance for a dictionary word to count as a suggestion.
    pub suggestion_threshold: usize,
    /// Suggestions kept per misspelled word after ranking.
    pub max_suggestions: usize,
    /// Worker threads shared by the classification and suggestion phases.
    pub workers: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            max_dict_words: 466_600,
            max_word_len: 50,
            max_input_words: 50_000,
            max_misspelled: 5_000,
            suggestion_threshold: 2,
            max_suggestions: 5,
            workers: 8,
        }
    }
}

impl CheckerConfig {
    /// Reads a JSON override file on top of the defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_classic_limits() {
        let config = CheckerConfig::default();
        assert_eq!(config.max_dict_words, 466_600);
        assert_eq!(config.max_word_len, 50);
        assert_eq!(config.max_input_words, 50_000);
        assert_eq!(config.max_misspelled, 5_000);
        assert_eq!(config.suggestion_threshold, 2);
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.workers, 8);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"workers": 2, "suggestion_threshold": 3}}"#).unwrap();

        let config = CheckerConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.workers, 2);
        assert_eq!(config.suggestion_threshold, 3);
        assert_eq!(config.max_suggestions, 5);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CheckerConfig::from_json_file("/no/such/config.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = CheckerConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
