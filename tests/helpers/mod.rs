#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use semantle::embedding::{EmbeddingError, EmbeddingGateway, EmbeddingProvider};
use semantle::game::GameEngine;
use semantle::words::WordSource;

/// Target word used by [`ocean_engine`].
pub const TARGET: &str = "ocean";

/// Deterministic in-process embedding provider.
///
/// Known words map to fixed vectors; anything else lands on the z axis, which
/// is orthogonal to every vector in [`FakeProvider::ocean`].
pub struct FakeProvider {
    vectors: HashMap<String, Vec<f32>>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    configured: bool,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            vectors: HashMap::new(),
            failing: HashSet::new(),
            delay: None,
            configured: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Vocabulary around the target "ocean" (x axis). Cosines to the target
    /// after normalization: sea ≈ 0.994, lake = 0.8, wave = 0.6, tree ≈ 0.2, desert ≈ -0.3.
    pub fn ocean() -> Self {
        Self::new()
            .with("ocean", [1.0, 0.0, 0.0])
            .with("sea", [0.9, 0.1, 0.0])
            .with("wave", [0.6, 0.8, 0.0])
            .with("tree", [0.2, 0.98, 0.0])
            .with("desert", [-0.3, 0.95, 0.0])
            .with("lake", [0.8, 0.0, 0.6])
    }

    pub fn with(mut self, word: &str, vector: [f32; 3]) -> Self {
        self.vectors.insert(word.to_string(), vector.to_vec());
        self
    }

    /// Make `word` fail with a provider error.
    pub fn failing(mut self, word: &str) -> Self {
        self.failing.insert(word.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for FakeProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(text) {
            return Err(EmbeddingError::Provider {
                status: Some(500),
                message: format!("cannot embed {text}"),
            });
        }
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0, 0.0, 1.0]))
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

/// Engine whose only possible target is [`TARGET`].
pub fn engine_with(provider: Arc<FakeProvider>) -> GameEngine {
    let words = WordSource::new([TARGET], HashMap::new()).unwrap();
    GameEngine::new(Arc::new(EmbeddingGateway::new(provider)), words)
}

pub fn ocean_engine() -> (GameEngine, Arc<FakeProvider>) {
    let provider = Arc::new(FakeProvider::ocean());
    (engine_with(provider.clone()), provider)
}
