//! Mapping of engine errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::ErrorBody;
use crate::embedding::EmbeddingError;
use crate::game::GameError;

#[derive(Debug)]
pub enum ApiError {
    Game(GameError),
    BadRequest(String),
}

impl From<GameError> for ApiError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Game(e) => match e {
                GameError::NotFound => StatusCode::NOT_FOUND,
                GameError::AlreadyOver | GameError::InvalidWord | GameError::DuplicateWord => {
                    StatusCode::BAD_REQUEST
                }
                GameError::Embedding(EmbeddingError::NotConfigured) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                GameError::Embedding(EmbeddingError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
                GameError::Embedding(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            Self::BadRequest(detail) => ErrorBody {
                detail: detail.clone(),
                kind: "bad_request".into(),
            },
            Self::Game(e) => ErrorBody {
                detail: e.to_string(),
                kind: e.kind().into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), kind = %body.kind, detail = %body.detail, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), kind = %body.kind, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (GameError::NotFound, StatusCode::NOT_FOUND),
            (GameError::AlreadyOver, StatusCode::BAD_REQUEST),
            (GameError::InvalidWord, StatusCode::BAD_REQUEST),
            (GameError::DuplicateWord, StatusCode::BAD_REQUEST),
            (
                EmbeddingError::NotConfigured.into(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (EmbeddingError::Timeout.into(), StatusCode::GATEWAY_TIMEOUT),
            (
                EmbeddingError::MalformedResponse("x".into()).into(),
                StatusCode::BAD_GATEWAY,
            ),
            (
                EmbeddingError::Provider {
                    status: Some(500),
                    message: "x".into(),
                }
                .into(),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
