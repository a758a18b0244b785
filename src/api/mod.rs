//! HTTP API surface.
//!
//! A thin translation layer: each handler parses the request, calls one
//! [`GameEngine`] operation, and maps the outcome to JSON.

pub mod error;
pub mod types;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::config::SemantleConfig;
use crate::game::GameEngine;
use error::ApiError;
use types::{
    GameStateResponse, GiveUpResponse, GuessRequest, GuessResponse, HealthResponse,
    MessageResponse, SimilarityQuery, SimilarityResponse, StartGameRequest, DEFAULT_DIFFICULTY,
};

/// Shared handler state: the engine plus read-only configuration.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<GameEngine>,
    pub config: Arc<SemantleConfig>,
}

impl AppState {
    pub fn new(engine: GameEngine, config: SemantleConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/game/start", post(start_game))
        .route("/game/guess", post(make_guess))
        .route("/game/{id}", get(game_state).delete(delete_game))
        .route("/game/{id}/give-up", post(give_up))
        .route("/similarity", get(similarity))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let engine = &state.engine;
    Json(HealthResponse {
        status: "ok".into(),
        message: "Semantle - guess the secret word by meaning".into(),
        model: state.config.embedding.model.clone(),
        word_pool_size: engine.words().pool_size(),
        daily_word_mode: true,
        api_configured: engine.embeddings().is_configured(),
        active_games: engine.session_count(),
    })
}

/// Accepts an empty body as well as JSON with any subset of the fields.
async fn start_game(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GameStateResponse>, ApiError> {
    let request: StartGameRequest = if body.iter().all(u8::is_ascii_whitespace) {
        StartGameRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))?
    };

    let difficulty = request.difficulty.as_deref().unwrap_or(DEFAULT_DIFFICULTY);
    let daily_mode = request.daily_mode.unwrap_or(false);

    let view = state.engine.create(difficulty, daily_mode).await?;
    Ok(Json(view.into()))
}

async fn make_guess(
    State(state): State<AppState>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, ApiError> {
    let result = state.engine.guess(&request.game_id, &request.word).await?;
    Ok(Json(result.into()))
}

async fn game_state(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let view = state.engine.state(&id).await?;
    Ok(Json(view.into()))
}

async fn give_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GiveUpResponse>, ApiError> {
    let target_word = state.engine.give_up(&id).await?;
    Ok(Json(GiveUpResponse {
        game_id: id,
        target_word,
        message: "Game over! Better luck next time.".into(),
    }))
}

async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.engine.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Game deleted successfully".into(),
    }))
}

async fn similarity(
    State(state): State<AppState>,
    Query(query): Query<SimilarityQuery>,
) -> Result<Json<SimilarityResponse>, ApiError> {
    let report = state.engine.similarity(&query.word1, &query.word2).await?;
    Ok(Json(report.into()))
}
