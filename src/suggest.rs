use std::cmp::Ordering;

use rayon::prelude::*;

use crate::distance::edit_distance;
use crate::lexicon::Lexicon;
use crate::partition::chunk_ranges;

/// A dictionary word within the edit-distance threshold of a misspelled
/// word. Ordered by distance first, then alphabetically; discovery order
/// never participates in ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Scans the lexicon for words within `threshold` edits of `word` and
/// returns the best `top_k`, sorted by the `Suggestion` order.
///
/// The lexicon index range is chunked one contiguous slice per pool worker.
/// Each worker skips entries whose length differs from the query by more
/// than `threshold` (edit distance can never be smaller than the length
/// difference), computes the distance for survivors, and collects hits into
/// its own buffer with no synchronization. Buffers are concatenated
/// single-threaded after the join, then sorted and truncated. The result is
/// identical for any worker count.
pub(crate) fn suggest(
    pool: &rayon::ThreadPool,
    word: &str,
    lexicon: &Lexicon,
    threshold: usize,
    top_k: usize,
) -> Vec<Suggestion> {
    let word_len = word.len();
    let dict = lexicon.words();

    let buffers: Vec<Vec<Suggestion>> = pool.install(|| {
        chunk_ranges(dict.len(), pool.current_num_threads())
            .into_par_iter()
            .map(|range| {
                let mut local = Vec::new();
                for entry in &dict[range] {
                    if entry.len().abs_diff(word_len) > threshold {
                        continue;
                    }
                    let distance = edit_distance(word, entry);
                    if distance <= threshold {
                        local.push(Suggestion {
                            word: entry.clone(),
                            distance,
                        });
                    }
                }
                local
            })
            .collect()
    });

    let mut merged: Vec<Suggestion> = buffers.into_iter().flatten().collect();
    merged.sort_unstable();
    merged.truncate(top_k);
    merged
}
