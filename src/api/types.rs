//! Wire types for the HTTP API. Field names stay compatible with existing
//! Semantle clients (`game_over`, `guess_number`, `started_at`, ...).

use serde::{Deserialize, Serialize};

use crate::game::{GuessResult, RankedGuess, SessionView, SimilarityReport};

pub const DEFAULT_DIFFICULTY: &str = "normal";

#[derive(Debug, Default, Deserialize)]
pub struct StartGameRequest {
    pub difficulty: Option<String>,
    pub daily_mode: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub game_id: String,
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct SimilarityQuery {
    pub word1: String,
    pub word2: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GuessEntry {
    pub word: String,
    pub similarity: f64,
    pub guess_number: usize,
    pub is_correct: bool,
    pub rank: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameStateResponse {
    pub game_id: String,
    pub guesses: Vec<GuessEntry>,
    pub guess_count: usize,
    pub game_over: bool,
    pub target_word: Option<String>,
    pub started_at: String,
    pub difficulty: String,
    pub daily_mode: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GuessResponse {
    pub game_id: String,
    pub word: String,
    pub similarity: f64,
    pub rank: usize,
    pub percentile: f64,
    pub guess_number: usize,
    pub is_correct: bool,
    pub game_over: bool,
    pub top_similarity: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GiveUpResponse {
    pub game_id: String,
    pub target_word: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub model: String,
    pub word_pool_size: usize,
    pub daily_word_mode: bool,
    pub api_configured: bool,
    pub active_games: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub word1: String,
    pub word2: String,
    pub similarity: f64,
    pub raw_similarity: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
    pub kind: String,
}

impl From<RankedGuess> for GuessEntry {
    fn from(ranked: RankedGuess) -> Self {
        Self {
            word: ranked.guess.word,
            similarity: ranked.guess.similarity,
            guess_number: ranked.guess.sequence_number,
            is_correct: ranked.guess.is_correct,
            rank: ranked.rank,
        }
    }
}

impl From<SessionView> for GameStateResponse {
    fn from(view: SessionView) -> Self {
        Self {
            game_id: view.game_id,
            guesses: view.guesses.into_iter().map(GuessEntry::from).collect(),
            guess_count: view.guess_count,
            game_over: view.is_over,
            target_word: view.target_word,
            started_at: view.created_at.to_rfc3339(),
            difficulty: view.difficulty,
            daily_mode: view.daily_mode,
        }
    }
}

impl From<GuessResult> for GuessResponse {
    fn from(result: GuessResult) -> Self {
        Self {
            game_id: result.game_id,
            word: result.guess.word,
            similarity: result.guess.similarity,
            rank: result.rank,
            percentile: result.percentile,
            guess_number: result.guess.sequence_number,
            is_correct: result.guess.is_correct,
            game_over: result.is_over,
            top_similarity: result.top_similarity,
        }
    }
}

impl From<SimilarityReport> for SimilarityResponse {
    fn from(report: SimilarityReport) -> Self {
        Self {
            word1: report.word1,
            word2: report.word2,
            similarity: report.similarity,
            raw_similarity: report.raw_similarity,
        }
    }
}
