//! Game sessions: domain types, ranking, the in-memory session store, and the
//! engine that ties them to the embedding gateway and word source.

pub mod engine;
pub mod ranking;
pub mod store;
pub mod types;

use thiserror::Error;

use crate::embedding::EmbeddingError;

pub use engine::GameEngine;
pub use store::SessionStore;
pub use types::{Guess, GuessResult, RankedGuess, Session, SessionView, SimilarityReport};

/// Minimum guess length, in characters, after normalization.
pub const MIN_WORD_CHARS: usize = 2;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("Game not found")]
    NotFound,
    #[error("Game is already over")]
    AlreadyOver,
    #[error("Invalid word")]
    InvalidWord,
    #[error("Word already guessed")]
    DuplicateWord,
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

impl GameError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::AlreadyOver => "already_over",
            Self::InvalidWord => "invalid_word",
            Self::DuplicateWord => "duplicate_word",
            Self::Embedding(e) => e.kind(),
        }
    }
}

/// Canonical form of a guess: trimmed and lower-cased.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_word("  OcEaN \n"), "ocean");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn embedding_errors_keep_their_kind() {
        let err: GameError = EmbeddingError::Timeout.into();
        assert_eq!(err.kind(), "timeout");
        assert_eq!(err.to_string(), "request to embedding provider timed out");
        assert_eq!(GameError::DuplicateWord.kind(), "duplicate_word");
    }
}
