//! Game session engine.
//!
//! Every public operation resolves a session through the [`SessionStore`].
//! Mutations (`guess`, `give_up`, `delete`) hold the session's writer gate for
//! their whole duration. A guess validates against a snapshot, calls the
//! embedding gateway with no state lock held, then commits in one step with no
//! `.await` between the last check and the append, so a cancelled request
//! leaves the session untouched.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::ranking::{diagnostic_similarity, game_similarity};
use super::store::{SessionHandle, SessionStore};
use super::types::{GuessResult, Session, SessionView, SimilarityReport};
use super::{normalize_word, GameError, MIN_WORD_CHARS};
use crate::embedding::{cosine, EmbeddingError, EmbeddingGateway};
use crate::words::WordSource;

pub struct GameEngine {
    store: SessionStore,
    embeddings: Arc<EmbeddingGateway>,
    words: WordSource,
}

impl GameEngine {
    pub fn new(embeddings: Arc<EmbeddingGateway>, words: WordSource) -> Self {
        Self {
            store: SessionStore::new(),
            embeddings,
            words,
        }
    }

    pub fn words(&self) -> &WordSource {
        &self.words
    }

    pub fn embeddings(&self) -> &EmbeddingGateway {
        &self.embeddings
    }

    pub fn session_count(&self) -> usize {
        self.store.len()
    }

    /// Start a session using today's local date for daily mode.
    pub async fn create(&self, difficulty: &str, daily_mode: bool) -> Result<SessionView, GameError> {
        self.create_on(difficulty, daily_mode, Local::now().date_naive())
            .await
    }

    /// Start a session. The target vector is resolved before anything is
    /// stored, so a gateway failure leaves no trace in the store.
    pub async fn create_on(
        &self,
        difficulty: &str,
        daily_mode: bool,
        today: NaiveDate,
    ) -> Result<SessionView, GameError> {
        if !self.embeddings.is_configured() {
            return Err(EmbeddingError::NotConfigured.into());
        }

        let target_word = match daily_mode {
            true => self.words.daily_word(today),
            false => self.words.random_word(difficulty),
        };
        let target_word = target_word.to_string();

        let target_vector = self.embeddings.embed(&target_word).await.map_err(|e| {
            tracing::error!(error = %e, "failed to embed target word");
            e
        })?;

        let session = Session::new(
            uuid::Uuid::new_v4().to_string(),
            target_word,
            target_vector,
            difficulty.to_string(),
            daily_mode,
        );
        let view = session.view();

        tracing::info!(game_id = %session.id, difficulty, daily_mode, "game started");
        tracing::debug!(game_id = %session.id, target = %session.target_word, "target selected");
        self.store.insert(session);

        Ok(view)
    }

    pub async fn guess(&self, game_id: &str, raw_word: &str) -> Result<GuessResult, GameError> {
        let handle = self.handle(game_id)?;
        let _gate = handle.begin_write().await;
        self.ensure_live(game_id)?;

        let word = normalize_word(raw_word);
        let target_vector = {
            let session = handle.read().await;
            if session.is_over {
                return Err(GameError::AlreadyOver);
            }
            if word.chars().count() < MIN_WORD_CHARS {
                return Err(GameError::InvalidWord);
            }
            if session.has_guessed(&word) {
                return Err(GameError::DuplicateWord);
            }
            session.target_vector.clone()
        };

        let vector = self.embeddings.embed(&word).await?;
        let similarity = game_similarity(cosine(&vector, &target_vector));

        let result = handle.write().await.record_guess(word, similarity);

        tracing::info!(
            game_id,
            word = %result.guess.word,
            similarity = result.guess.similarity,
            rank = result.rank,
            guess_number = result.guess.sequence_number,
            correct = result.guess.is_correct,
            "guess recorded"
        );
        Ok(result)
    }

    pub async fn state(&self, game_id: &str) -> Result<SessionView, GameError> {
        let handle = self.handle(game_id)?;
        let view = handle.read().await.view();
        Ok(view)
    }

    /// End the session and reveal the target. Calling it again is harmless.
    pub async fn give_up(&self, game_id: &str) -> Result<String, GameError> {
        let handle = self.handle(game_id)?;
        let _gate = handle.begin_write().await;
        self.ensure_live(game_id)?;

        let mut session = handle.write().await;
        if !session.is_over {
            session.is_over = true;
            tracing::info!(game_id, guesses = session.guess_count(), "player gave up");
        }
        Ok(session.target_word.clone())
    }

    pub async fn delete(&self, game_id: &str) -> Result<(), GameError> {
        let handle = self.handle(game_id)?;
        let _gate = handle.begin_write().await;
        self.store.remove(game_id).ok_or(GameError::NotFound)?;
        tracing::info!(game_id, "game deleted");
        Ok(())
    }

    /// Compare two arbitrary words on the diagnostic `[0, 100]` scale.
    pub async fn similarity(&self, word1: &str, word2: &str) -> Result<SimilarityReport, GameError> {
        if !self.embeddings.is_configured() {
            return Err(EmbeddingError::NotConfigured.into());
        }
        let a = self.embeddings.embed(&normalize_word(word1)).await?;
        let b = self.embeddings.embed(&normalize_word(word2)).await?;
        let raw_similarity = cosine(&a, &b);

        Ok(SimilarityReport {
            word1: word1.to_string(),
            word2: word2.to_string(),
            raw_similarity,
            similarity: diagnostic_similarity(raw_similarity),
        })
    }

    fn handle(&self, game_id: &str) -> Result<Arc<SessionHandle>, GameError> {
        self.store.get(game_id).ok_or(GameError::NotFound)
    }

    /// Under the writer gate, confirm a concurrent delete did not win the race.
    fn ensure_live(&self, game_id: &str) -> Result<(), GameError> {
        if self.store.contains(game_id) {
            Ok(())
        } else {
            Err(GameError::NotFound)
        }
    }
}
