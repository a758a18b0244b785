use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SemantleConfig {
    pub server: ServerConfig,
    pub embedding: EmbeddingConfig,
    pub words: WordsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Allow any origin, method, and header (browser front-ends on other hosts).
    pub cors_permissive: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Inference endpoint that accepts `{"inputs": ..., "options": ...}`.
    pub api_url: String,
    /// Bearer credential. Empty means the gateway is not configured.
    pub api_key: String,
    /// Human-readable model name reported by the health endpoint.
    pub model: String,
    pub timeout_secs: u64,
    /// Wait before the single retry after a 503 "model loading" response.
    pub retry_backoff_secs: u64,
    /// Maximum cached vectors. `0` keeps every vector for the life of the
    /// process, which is only reasonable while the word pool and player base
    /// stay small.
    pub cache_capacity: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct WordsConfig {
    /// Newline-delimited word list replacing the built-in pool.
    pub pool_file: Option<String>,
    /// Per-difficulty pools. Difficulties not listed draw from the default pool.
    pub pools: HashMap<String, Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            log_level: "info".into(),
            cors_permissive: true,
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api-inference.huggingface.co/models/BAAI/bge-small-en-v1.5".into(),
            api_key: String::new(),
            model: "BAAI/bge-small-en-v1.5".into(),
            timeout_secs: 60,
            retry_backoff_secs: 10,
            cache_capacity: 0,
        }
    }
}

impl EmbeddingConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Returns `~/.semantle/`
pub fn default_semantle_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".semantle")
}

/// Returns the default config file path: `~/.semantle/config.toml`
pub fn default_config_path() -> PathBuf {
    default_semantle_dir().join("config.toml")
}

impl SemantleConfig {
    /// Load config from the default TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            SemantleConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HUGGINGFACE_API_KEY") {
            self.embedding.api_key = val;
        }
        if let Ok(val) = std::env::var("SEMANTLE_API_URL") {
            self.embedding.api_url = val;
        }
        if let Ok(val) = std::env::var("SEMANTLE_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("SEMANTLE_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(value = %val, "ignoring invalid SEMANTLE_PORT"),
            }
        }
        if let Ok(val) = std::env::var("SEMANTLE_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("SEMANTLE_WORDS") {
            self.words.pool_file = Some(val);
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
