/// Sorted, immutable dictionary of valid words.
///
/// Built once, then read-only; membership tests are lock-free and safe to
/// call concurrently from any number of threads. Duplicate entries in the
/// source word list are kept as-is.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Sorts `words` ascending (byte-wise lexicographic) and freezes them.
    pub fn new(mut words: Vec<String>) -> Self {
        words.sort_unstable();
        Lexicon { words }
    }

    /// Binary-search membership test. Always false on an empty lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|entry| entry.as_str().cmp(word))
            .is_ok()
    }

    /// The sorted word slice, for index-range scans.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
