//! Generic "group and count by key, ascending" utility.
//!
//! Both split-cell reports are the same reduction: sort a sequence, then
//! coalesce consecutive equal values into (value, run_length) pairs. The
//! idiom is implemented once here and shared by both aggregation passes.

/// Sort `values` ascending and coalesce equal runs into `(value, run_length)`.
///
/// Equivalent to a reduce-by-key with constant-1 values after a sort:
/// - output is ordered by ascending value, one pair per distinct input value
/// - run lengths sum to `values.len()`
/// - empty input yields empty output
///
/// Deterministic; input order does not affect the result.
pub fn count_runs<T: Ord + Copy>(values: &[T]) -> Vec<(T, u64)> {
    let mut sorted: Vec<T> = values.to_vec();
    sorted.sort_unstable();
    let mut runs: Vec<(T, u64)> = Vec::new();
    for &v in &sorted {
        match runs.last_mut() {
            Some((key, n)) if *key == v => *n += 1,
            _ => runs.push((v, 1)),
        }
    }
    runs
}
