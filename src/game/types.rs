//! Core game type definitions.
//!
//! A [`Session`] owns its hidden target and an append-only list of [`Guess`]
//! records. The only state transition is `is_over: false → true`.

use chrono::{DateTime, Utc};

use super::ranking;
use crate::embedding::cache::UnitVector;

/// A single scored submission. Immutable once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    /// Normalized guess text.
    pub word: String,
    /// Score in `[0, 100]`, fixed at submission time.
    pub similarity: f64,
    /// 1-based submission position.
    pub sequence_number: usize,
    pub is_correct: bool,
}

/// A guess annotated with its current rank in the session.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub guess: Guess,
    pub rank: usize,
}

/// One game instance with a hidden target word.
#[derive(Debug, Clone)]
pub struct Session {
    /// UUID v4, generated at creation.
    pub id: String,
    pub target_word: String,
    pub target_vector: UnitVector,
    /// Submission order; never reordered or truncated.
    pub guesses: Vec<Guess>,
    pub is_over: bool,
    pub created_at: DateTime<Utc>,
    pub difficulty: String,
    pub daily_mode: bool,
}

/// Outcome of a successful guess.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessResult {
    pub game_id: String,
    pub guess: Guess,
    pub rank: usize,
    pub percentile: f64,
    /// Similarity of the guess currently ranked first.
    pub top_similarity: f64,
    pub is_over: bool,
}

/// Client-safe snapshot of a session. The target is present only once the game is over.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub game_id: String,
    /// Ranking order.
    pub guesses: Vec<RankedGuess>,
    pub guess_count: usize,
    pub is_over: bool,
    pub target_word: Option<String>,
    pub created_at: DateTime<Utc>,
    pub difficulty: String,
    pub daily_mode: bool,
}

/// Result of comparing two arbitrary words.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityReport {
    pub word1: String,
    pub word2: String,
    /// Dot product of the two unit vectors, in `[-1, 1]`.
    pub raw_similarity: f64,
    /// `raw_similarity` shifted onto `[0, 100]`.
    pub similarity: f64,
}

impl Session {
    pub fn new(
        id: String,
        target_word: String,
        target_vector: UnitVector,
        difficulty: String,
        daily_mode: bool,
    ) -> Self {
        Self {
            id,
            target_word,
            target_vector,
            guesses: Vec::new(),
            is_over: false,
            created_at: Utc::now(),
            difficulty,
            daily_mode,
        }
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    pub fn has_guessed(&self, word: &str) -> bool {
        self.guesses.iter().any(|g| g.word == word)
    }

    /// Append a scored guess and compute its standing.
    ///
    /// Callers must already have rejected over sessions and duplicate words.
    pub fn record_guess(&mut self, word: String, similarity: f64) -> GuessResult {
        let is_correct = word == self.target_word;
        let guess = Guess {
            word,
            similarity,
            sequence_number: self.guesses.len() + 1,
            is_correct,
        };
        self.guesses.push(guess.clone());

        let order = ranking::ranked(&self.guesses);
        let total = order.len();
        let rank = order
            .iter()
            .position(|g| g.sequence_number == guess.sequence_number)
            .map_or(total, |i| i + 1);
        let top_similarity = order.first().map_or(similarity, |g| g.similarity);

        if is_correct {
            self.is_over = true;
        }

        GuessResult {
            game_id: self.id.clone(),
            guess,
            rank,
            percentile: ranking::percentile(rank, total),
            top_similarity,
            is_over: self.is_over,
        }
    }

    /// Guesses in ranking order, each annotated with its rank.
    pub fn ranked_guesses(&self) -> Vec<RankedGuess> {
        ranking::ranked(&self.guesses)
            .into_iter()
            .enumerate()
            .map(|(i, g)| RankedGuess {
                guess: g.clone(),
                rank: i + 1,
            })
            .collect()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            game_id: self.id.clone(),
            guesses: self.ranked_guesses(),
            guess_count: self.guess_count(),
            is_over: self.is_over,
            target_word: self.is_over.then(|| self.target_word.clone()),
            created_at: self.created_at,
            difficulty: self.difficulty.clone(),
            daily_mode: self.daily_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            "game-1".into(),
            "ocean".into(),
            vec![1.0f32, 0.0].into(),
            "normal".into(),
            false,
        )
    }

    #[test]
    fn record_guess_assigns_sequence_and_rank() {
        let mut s = session();
        let first = s.record_guess("tree".into(), 20.0);
        assert_eq!(first.guess.sequence_number, 1);
        assert_eq!(first.rank, 1);
        assert_eq!(first.percentile, 1000.0);

        let second = s.record_guess("sea".into(), 80.0);
        assert_eq!(second.guess.sequence_number, 2);
        assert_eq!(second.rank, 1);
        assert_eq!(second.top_similarity, 80.0);

        let third = s.record_guess("rock".into(), 5.0);
        assert_eq!(third.rank, 3);
        assert_eq!(third.top_similarity, 80.0);
        assert!((third.percentile - 1000.0 / 3.0).abs() < 1e-9);
        assert_eq!(s.guess_count(), 3);
        assert!(!s.is_over);
    }

    #[test]
    fn exact_match_ends_game() {
        let mut s = session();
        let result = s.record_guess("ocean".into(), 100.0);
        assert!(result.guess.is_correct);
        assert!(result.is_over);
        assert!(s.is_over);
    }

    #[test]
    fn view_hides_target_until_over() {
        let mut s = session();
        s.record_guess("tree".into(), 10.0);
        s.record_guess("sea".into(), 70.0);

        let view = s.view();
        assert_eq!(view.target_word, None);
        assert_eq!(view.guess_count, 2);
        assert_eq!(view.guesses[0].guess.word, "sea");
        assert_eq!(view.guesses[0].rank, 1);
        assert_eq!(view.guesses[1].rank, 2);

        s.is_over = true;
        assert_eq!(s.view().target_word.as_deref(), Some("ocean"));
    }

    #[test]
    fn tied_guess_ranks_below_earlier_equal() {
        let mut s = session();
        s.record_guess("first".into(), 40.0);
        let tied = s.record_guess("second".into(), 40.0);
        assert_eq!(tied.rank, 2);
        assert_eq!(tied.percentile, 500.0);
    }
}
