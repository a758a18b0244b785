//! Text-to-vector embedding gateway.
//!
//! Provides the [`EmbeddingProvider`] trait for remote inference backends, the
//! Hugging Face implementation in [`huggingface`], and the caching
//! [`EmbeddingGateway`] that every game operation goes through. Vectors handed
//! out by the gateway are always L2-normalized, so cosine similarity reduces to
//! a dot product.

pub mod cache;
pub mod huggingface;

use async_trait::async_trait;
use thiserror::Error;

pub use cache::EmbeddingGateway;
pub use huggingface::HuggingFaceProvider;

/// Failures surfaced by the embedding gateway.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmbeddingError {
    #[error("embedding provider not configured: set HUGGINGFACE_API_KEY")]
    NotConfigured,
    #[error("embedding provider error{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Provider { status: Option<u16>, message: String },
    #[error("request to embedding provider timed out")]
    Timeout,
    #[error("malformed embedding response: {0}")]
    MalformedResponse(String),
}

impl EmbeddingError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Provider { .. } => "provider_error",
            Self::Timeout => "timeout",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// A remote embedding backend.
///
/// Implementations return the vector exactly as the backend produced it;
/// normalization and caching belong to [`EmbeddingGateway`].
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text string into a raw vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Whether a credential is available. Unconfigured providers are never called.
    fn is_configured(&self) -> bool {
        true
    }
}

/// L2-normalize a vector.
///
/// Empty and zero-norm vectors have no direction and are rejected.
pub fn l2_normalize(v: &[f32]) -> Result<Vec<f32>, EmbeddingError> {
    if v.is_empty() {
        return Err(EmbeddingError::MalformedResponse("empty vector".into()));
    }
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if !norm.is_finite() || norm == 0.0 {
        return Err(EmbeddingError::MalformedResponse(format!(
            "vector norm is {norm}"
        )));
    }
    Ok(v.iter().map(|x| x / norm).collect())
}

/// Cosine similarity of two unit vectors (their dot product), accumulated in f64.
pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum()
}
