use std::sync::Mutex;

use rayon::prelude::*;

use crate::lexicon::Lexicon;
use crate::partition::chunk_ranges;

/// Partitions `words` into one contiguous chunk per pool worker and tests
/// each word against the lexicon. Words that fail the membership test are
/// appended to a single shared list under a mutex; the capacity check sits
/// inside the guarded region, so the list never exceeds `max_misspelled`
/// even when two workers race at the boundary. Overflow is dropped silently.
///
/// The order of the returned list across chunks depends on worker completion
/// order; callers must treat it as a multiset. Within one chunk, appends
/// follow input order.
pub(crate) fn classify(
    pool: &rayon::ThreadPool,
    words: &[String],
    lexicon: &Lexicon,
    max_misspelled: usize,
) -> Vec<String> {
    let misspelled = Mutex::new(Vec::new());

    pool.install(|| {
        chunk_ranges(words.len(), pool.current_num_threads())
            .into_par_iter()
            .for_each(|range| {
                for word in &words[range] {
                    if !lexicon.contains(word) {
                        let mut list = misspelled
                            .lock()
                            .expect("a classifier worker panicked holding the list lock");
                        if list.len() < max_misspelled {
                            list.push(word.clone());
                        }
                    }
                }
            });
    });

    misspelled
        .into_inner()
        .expect("a classifier worker panicked holding the list lock")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(workers: usize) -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .unwrap()
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort_unstable();
        words
    }

    #[test]
    fn finds_words_missing_from_lexicon() {
        let lex = Lexicon::new(strings(&["cat", "dog", "fish"]));
        let input = strings(&["cat", "cta", "dog", "dgo", "fish"]);
        let result = classify(&pool(2), &input, &lex, usize::MAX);
        assert_eq!(sorted(result), strings(&["cta", "dgo"]));
    }

    #[test]
    fn matches_sequential_filter_for_any_worker_count() {
        let lex = Lexicon::new(strings(&["alpha", "beta", "gamma", "delta"]));
        let input: Vec<String> = (0..100)
            .map(|i| {
                if i % 3 == 0 {
                    format!("word{i}")
                } else {
                    "alpha".to_string()
                }
            })
            .collect();

        let expected: Vec<String> = input
            .iter()
            .filter(|w| !lex.contains(w))
            .cloned()
            .collect();

        for workers in [1, 2, 8, 200] {
            let result = classify(&pool(workers), &input, &lex, usize::MAX);
            assert_eq!(
                sorted(result),
                sorted(expected.clone()),
                "mismatch at {workers} workers"
            );
        }
    }

    #[test]
    fn single_worker_preserves_input_order() {
        let lex = Lexicon::new(strings(&["known"]));
        let input = strings(&["zz", "known", "aa", "mm"]);
        let result = classify(&pool(1), &input, &lex, usize::MAX);
        assert_eq!(result, strings(&["zz", "aa", "mm"]));
    }

    #[test]
    fn cap_truncates_silently() {
        let lex = Lexicon::new(strings(&["known"]));
        let input: Vec<String> = (0..50).map(|i| format!("bad{i}")).collect();
        for workers in [1, 4] {
            let result = classify(&pool(workers), &input, &lex, 10);
            assert_eq!(result.len(), 10);
            assert!(result.iter().all(|w| w.starts_with("bad")));
        }
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let lex = Lexicon::new(strings(&["cat"]));
        assert!(classify(&pool(4), &[], &lex, 100).is_empty());
    }

    #[test]
    fn everything_misspelled_against_empty_lexicon() {
        let lex = Lexicon::new(Vec::new());
        let input = strings(&["a", "b"]);
        let result = classify(&pool(2), &input, &lex, 100);
        assert_eq!(sorted(result), strings(&["a", "b"]));
    }
}
