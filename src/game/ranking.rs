//! Similarity scaling and rank math.
//!
//! Two scales exist on purpose: in-game scores clamp negative cosines to zero
//! before scaling, while the diagnostic endpoint shifts `[-1, 1]` onto
//! `[0, 100]`. They are not interchangeable.

use std::cmp::Ordering;

use super::types::Guess;

/// In-game score: negative cosine clamps to 0, then scale by 100.
pub fn game_similarity(raw: f64) -> f64 {
    raw.max(0.0) * 100.0
}

/// Diagnostic score: map `[-1, 1]` linearly onto `[0, 100]`.
pub fn diagnostic_similarity(raw: f64) -> f64 {
    (raw + 1.0) / 2.0 * 100.0
}

/// Relative standing out of 1000. Rank 1 of N is 1000, rank N of N is `1000 / N`.
pub fn percentile(rank: usize, total: usize) -> f64 {
    if total == 0 || rank == 0 || rank > total {
        return 1000.0;
    }
    ((total - rank + 1) as f64 / total as f64) * 1000.0
}

/// Ranking order: higher similarity first, earlier submission first on ties.
pub fn compare(a: &Guess, b: &Guess) -> Ordering {
    b.similarity
        .total_cmp(&a.similarity)
        .then(a.sequence_number.cmp(&b.sequence_number))
}

/// Guesses sorted into ranking order.
pub fn ranked(guesses: &[Guess]) -> Vec<&Guess> {
    let mut sorted: Vec<&Guess> = guesses.iter().collect();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}

/// 1-based rank of `word` among `guesses`.
pub fn rank_of(guesses: &[Guess], word: &str) -> Option<usize> {
    ranked(guesses)
        .iter()
        .position(|g| g.word == word)
        .map(|i| i + 1)
}
