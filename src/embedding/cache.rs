//! Caching front for an [`EmbeddingProvider`].
//!
//! The gateway is shared process-wide. The cache lock is never held across the
//! outbound call, so concurrent misses on the same text may each reach the
//! provider once; the first vector inserted wins and every caller receives it.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

use super::{l2_normalize, EmbeddingError, EmbeddingProvider};

/// An L2-normalized embedding, cheap to clone.
pub type UnitVector = Arc<[f32]>;

#[derive(Default)]
struct VectorCache {
    vectors: HashMap<String, UnitVector>,
    /// Insertion order, oldest first. Only consulted when bounded.
    order: VecDeque<String>,
}

pub struct EmbeddingGateway {
    provider: Arc<dyn EmbeddingProvider>,
    cache: RwLock<VectorCache>,
    /// `0` means unbounded.
    capacity: usize,
}

impl EmbeddingGateway {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_capacity(provider, 0)
    }

    /// Keep at most `capacity` vectors, evicting the oldest insert first.
    pub fn with_capacity(provider: Arc<dyn EmbeddingProvider>, capacity: usize) -> Self {
        Self {
            provider,
            cache: RwLock::new(VectorCache::default()),
            capacity,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    /// Number of cached vectors.
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .vectors
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the unit vector for `text`, keyed on the exact input string.
    pub async fn embed(&self, text: &str) -> Result<UnitVector, EmbeddingError> {
        if let Some(hit) = self.lookup(text) {
            tracing::trace!(text, "embedding cache hit");
            return Ok(hit);
        }

        if !self.provider.is_configured() {
            return Err(EmbeddingError::NotConfigured);
        }

        let raw = self.provider.embed(text).await?;
        let vector: UnitVector = l2_normalize(&raw)?.into();
        tracing::debug!(text, dims = vector.len(), "embedding fetched");

        Ok(self.insert(text, vector))
    }

    fn lookup(&self, text: &str) -> Option<UnitVector> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .vectors
            .get(text)
            .cloned()
    }

    fn insert(&self, text: &str, vector: UnitVector) -> UnitVector {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = cache.vectors.get(text) {
            return existing.clone();
        }

        cache.vectors.insert(text.to_string(), vector.clone());
        if self.capacity > 0 {
            cache.order.push_back(text.to_string());
            while cache.vectors.len() > self.capacity {
                let Some(oldest) = cache.order.pop_front() else {
                    break;
                };
                cache.vectors.remove(&oldest);
            }
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns `[len, 1.0]` for each text and counts calls.
    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl EmbeddingProvider for CountingProvider {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![text.len() as f32, 1.0])
        }
    }

    struct Unconfigured;

    #[async_trait]
    impl EmbeddingProvider for Unconfigured {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
            panic!("unconfigured provider must not be called");
        }

        fn is_configured(&self) -> bool {
            false
        }
    }

    struct ZeroProvider;

    #[async_trait]
    impl EmbeddingProvider for ZeroProvider {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
            Ok(vec![0.0, 0.0])
        }
    }

    #[tokio::test]
    async fn caches_by_exact_text() {
        let provider = Arc::new(CountingProvider::default());
        let gateway = EmbeddingGateway::new(provider.clone());

        let a = gateway.embed("ocean").await.unwrap();
        let b = gateway.embed("ocean").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        // Case variants are distinct keys.
        gateway.embed("Ocean").await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert_eq!(gateway.len(), 2);
    }

    #[tokio::test]
    async fn returned_vectors_are_unit_length() {
        let gateway = EmbeddingGateway::new(Arc::new(CountingProvider::default()));
        let v = gateway.embed("abc").await.unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn unconfigured_provider_is_never_called() {
        let gateway = EmbeddingGateway::new(Arc::new(Unconfigured));
        assert!(!gateway.is_configured());
        assert_eq!(
            gateway.embed("word").await.unwrap_err(),
            EmbeddingError::NotConfigured
        );
        assert!(gateway.is_empty());
    }

    #[tokio::test]
    async fn zero_vector_is_not_cached() {
        let gateway = EmbeddingGateway::new(Arc::new(ZeroProvider));
        let err = gateway.embed("void").await.unwrap_err();
        assert_eq!(err.kind(), "malformed_response");
        assert!(gateway.is_empty());
    }

    #[tokio::test]
    async fn bounded_cache_evicts_oldest() {
        let provider = Arc::new(CountingProvider::default());
        let gateway = EmbeddingGateway::with_capacity(provider.clone(), 2);

        gateway.embed("a").await.unwrap();
        gateway.embed("bb").await.unwrap();
        gateway.embed("ccc").await.unwrap();
        assert_eq!(gateway.len(), 2);

        // "a" was evicted and must be fetched again.
        gateway.embed("a").await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 4);
        // "ccc" survived.
        gateway.embed("ccc").await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn concurrent_misses_agree_on_one_vector() {
        let provider = Arc::new(CountingProvider::default());
        let gateway = Arc::new(EmbeddingGateway::new(provider.clone()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gateway = Arc::clone(&gateway);
                tokio::spawn(async move { gateway.embed("shared").await.unwrap() })
            })
            .collect();

        let mut vectors = Vec::new();
        for handle in handles {
            vectors.push(handle.await.unwrap());
        }
        assert!(vectors.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(gateway.len(), 1);
    }
}
