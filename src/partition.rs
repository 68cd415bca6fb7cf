use std::ops::Range;

/// Splits `0..len` into `workers` contiguous, non-overlapping ranges whose
/// sizes differ by at most one, the remainder going one-per-worker starting
/// from the first. Ranges past the end come back empty when there are more
/// workers than items, so every index is assigned exactly once for any
/// worker count.
pub(crate) fn chunk_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = len / workers;
    let remainder = len % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let size = chunk + usize::from(i < remainder);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}
