/// Levenshtein edit distance: minimum number of single-byte insertions,
/// deletions, and substitutions turning `a` into `b`.
///
/// Uses two rolling rows sized by the shorter string, so auxiliary space is
/// O(min(|a|, |b|)). Total over any pair of strings; `edit_distance("", s)`
/// is `s.len()`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let short = shorter.as_bytes();
    let n = short.len();

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, &lc) in longer.as_bytes().iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = if lc == short[j - 1] { 0 } else { 1 };
            let ins = curr[j - 1] + 1;
            let del = prev[j] + 1;
            let sub = prev[j - 1] + cost;
            curr[j] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
