/// Collatz Kernel — Summary Statistics
///
/// Pure derivation over a finished trajectory. Deterministic, no side
/// effects, no failure modes: the generator never returns an empty
/// trajectory.

use crate::domain::{SummaryStats, Trajectory};

/// Window size for the head and tail samples.
const SAMPLE_LEN: usize = 5;

/// Derive length, maximum, and head/tail samples from a trajectory.
///
/// Head positions run 1..=min(5, length); tail positions run from
/// `max(1, length - 4)` to `length`.
pub fn summarize(trajectory: &Trajectory) -> SummaryStats {
    let terms = trajectory.terms();
    let length = terms.len();

    let max_value = terms
        .iter()
        .max()
        .cloned()
        .expect("trajectory is never empty");

    let head = terms
        .iter()
        .take(SAMPLE_LEN)
        .enumerate()
        .map(|(i, v)| (i + 1, v.clone()))
        .collect();

    let tail_from = length.saturating_sub(SAMPLE_LEN);
    let tail = terms[tail_from..]
        .iter()
        .enumerate()
        .map(|(i, v)| (tail_from + i + 1, v.clone()))
        .collect();

    SummaryStats {
        length,
        max_value,
        head,
        tail,
    }
}
