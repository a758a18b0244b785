//! Target-word selection.
//!
//! [`WordSource`] holds a default pool plus optional per-difficulty pools. Daily
//! mode hashes the calendar date so every player (and every restart) sees the
//! same word on the same day; normal games draw uniformly at random.

pub mod pool;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::config::{expand_tilde, WordsConfig};

pub use pool::BUILTIN_POOL;

#[derive(Debug, Clone)]
pub struct WordSource {
    default_pool: Vec<String>,
    pools: HashMap<String, Vec<String>>,
}

impl WordSource {
    /// Build a source from raw word lists. Entries are trimmed, lower-cased,
    /// and deduplicated; the default pool must keep at least one word.
    pub fn new(
        default_pool: impl IntoIterator<Item = impl AsRef<str>>,
        pools: HashMap<String, Vec<String>>,
    ) -> Result<Self> {
        let default_pool = normalize_pool(default_pool);
        anyhow::ensure!(!default_pool.is_empty(), "default word pool is empty");

        let pools = pools
            .into_iter()
            .map(|(difficulty, words)| (difficulty, normalize_pool(words)))
            .filter(|(difficulty, words)| {
                if words.is_empty() {
                    tracing::warn!(%difficulty, "ignoring empty word pool");
                }
                !words.is_empty()
            })
            .collect();

        Ok(Self {
            default_pool,
            pools,
        })
    }

    /// The built-in pool with no difficulty-specific lists.
    pub fn builtin() -> Self {
        Self {
            default_pool: normalize_pool(BUILTIN_POOL),
            pools: HashMap::new(),
        }
    }

    /// Build from configuration, reading `pool_file` if one is set.
    pub fn from_config(config: &WordsConfig) -> Result<Self> {
        let source = match &config.pool_file {
            Some(path) => {
                let words = load_word_file(expand_tilde(path))?;
                Self::new(words, config.pools.clone())?
            }
            None => Self::new(BUILTIN_POOL.iter().copied(), config.pools.clone())?,
        };
        tracing::info!(
            pool_size = source.pool_size(),
            difficulty_pools = source.pools.len(),
            "word source ready"
        );
        Ok(source)
    }

    /// Size of the default pool (the one daily mode draws from).
    pub fn pool_size(&self) -> usize {
        self.default_pool.len()
    }

    /// Index into the default pool for `date`: SHA-256 of `YYYY-MM-DD`, read as
    /// a big-endian integer, modulo the pool size.
    pub fn daily_index(&self, date: NaiveDate) -> usize {
        let digest = Sha256::digest(date.format("%Y-%m-%d").to_string().as_bytes());
        let modulus = self.default_pool.len() as u128;
        let index = digest
            .iter()
            .fold(0u128, |acc, &byte| (acc * 256 + u128::from(byte)) % modulus);
        index as usize
    }

    pub fn daily_word(&self, date: NaiveDate) -> &str {
        &self.default_pool[self.daily_index(date)]
    }

    /// Uniform draw from the pool for `difficulty`, or the default pool if that
    /// difficulty has none configured.
    pub fn random_word(&self, difficulty: &str) -> &str {
        self.random_word_with(difficulty, &mut rand::thread_rng())
    }

    pub fn random_word_with<R: Rng + ?Sized>(&self, difficulty: &str, rng: &mut R) -> &str {
        let pool = self.pool_for(difficulty);
        &pool[rng.gen_range(0..pool.len())]
    }

    pub fn pool_for(&self, difficulty: &str) -> &[String] {
        self.pools
            .get(difficulty)
            .map(Vec::as_slice)
            .unwrap_or(&self.default_pool)
    }
}

/// Read a newline-delimited word list. Blank lines and `#` comments are skipped.
pub fn load_word_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(parse_word_list(&contents))
}

pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn normalize_pool(words: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty() && seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn daily_word_is_stable_for_a_date() {
        let a = WordSource::builtin();
        let b = WordSource::builtin();
        let day = date("2026-10-18");
        assert_eq!(a.daily_word(day), a.daily_word(day));
        assert_eq!(a.daily_word(day), b.daily_word(day));
    }

    #[test]
    fn daily_index_is_within_pool() {
        let source = WordSource::builtin();
        let mut day = date("2026-01-01");
        for _ in 0..400 {
            assert!(source.daily_index(day) < source.pool_size());
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn daily_word_varies_across_days() {
        let source = WordSource::builtin();
        let mut day = date("2026-01-01");
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..30 {
            distinct.insert(source.daily_word(day).to_string());
            day = day.succ_opt().unwrap();
        }
        assert!(distinct.len() > 10, "only {} distinct words", distinct.len());
    }

    #[test]
    fn builtin_pool_is_normalized_and_unique() {
        let source = WordSource::builtin();
        assert_eq!(source.pool_size(), BUILTIN_POOL.len());
        for word in source.pool_for("normal") {
            assert_eq!(word, &word.trim().to_lowercase());
        }
    }

    #[test]
    fn difficulty_pools_override_default() {
        let mut pools = HashMap::new();
        pools.insert("hard".to_string(), vec!["Entropy".to_string()]);
        pools.insert("empty".to_string(), vec!["  ".to_string()]);
        let source = WordSource::new(["ocean", "river"], pools).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(source.random_word_with("hard", &mut rng), "entropy");
            let normal = source.random_word_with("normal", &mut rng);
            assert!(normal == "ocean" || normal == "river");
        }
        // An all-blank pool is dropped, so that difficulty falls back.
        assert_eq!(source.pool_for("empty").len(), 2);
    }

    #[test]
    fn random_word_reaches_every_entry() {
        let source = WordSource::new(["a1", "b2", "c3"], HashMap::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(source.random_word_with("normal", &mut rng).to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn empty_default_pool_is_rejected() {
        assert!(WordSource::new(["", "   "], HashMap::new()).is_err());
    }

    #[test]
    fn parse_word_list_skips_comments_and_blanks() {
        let words = parse_word_list("# themes\nocean\n\n  river  \n#skip\nStar\n");
        assert_eq!(words, vec!["ocean", "river", "Star"]);
    }

    #[test]
    fn from_config_reads_pool_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "Alpha\nbeta\nalpha\n").unwrap();

        let config = WordsConfig {
            pool_file: Some(path.to_string_lossy().into_owned()),
            pools: HashMap::new(),
        };
        let source = WordSource::from_config(&config).unwrap();
        assert_eq!(source.pool_for("normal"), ["alpha", "beta"]);
    }

    #[test]
    fn from_config_missing_file_fails() {
        let config = WordsConfig {
            pool_file: Some("/nonexistent/semantle-words.txt".into()),
            pools: HashMap::new(),
        };
        assert!(WordSource::from_config(&config).is_err());
    }
}
