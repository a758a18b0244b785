//! CLI `doctor` command: check configuration and probe the embedding provider.

use anyhow::Result;

use semantle::config::SemantleConfig;
use semantle::words::WordSource;

const PROBE_TEXT: &str = "hello";

/// Print a configuration report and run one live embedding request.
pub async fn doctor(config: &SemantleConfig) -> Result<()> {
    println!("Semantle Health Report");
    println!("======================");
    println!();
    println!("Embedding provider:");
    println!("  Endpoint:        {}", config.embedding.api_url);
    println!("  Model:           {}", config.embedding.model);
    println!(
        "  API key:         {}",
        if config.embedding.is_configured() {
            "configured"
        } else {
            "MISSING (set HUGGINGFACE_API_KEY)"
        }
    );
    println!("  Timeout:         {}s", config.embedding.timeout_secs);
    println!(
        "  Cache capacity:  {}",
        match config.embedding.cache_capacity {
            0 => "unbounded".to_string(),
            n => n.to_string(),
        }
    );
    println!();

    match WordSource::from_config(&config.words) {
        Ok(words) => {
            println!("Word pool:         {} words", words.pool_size());
            for difficulty in config.words.pools.keys() {
                println!(
                    "  {:<16} {} words",
                    difficulty,
                    words.pool_for(difficulty).len()
                );
            }
        }
        Err(e) => println!("Word pool:         FAILED ({e:#})"),
    }
    println!();

    if !config.embedding.is_configured() {
        println!("Connection probe:  SKIPPED (no API key)");
        return Ok(());
    }

    let gateway = semantle::server::build_gateway(config)?;
    match gateway.embed(PROBE_TEXT).await {
        Ok(vector) => println!("Connection probe:  PASSED ({} dimensions)", vector.len()),
        Err(e) => {
            println!("Connection probe:  FAILED [{}] {e}", e.kind());
            println!();
            println!("Troubleshooting:");
            println!("  1. Verify the key at https://huggingface.co/settings/tokens");
            println!("  2. A 503 means the model is loading; retry in a minute");
            println!("  3. Check SEMANTLE_API_URL points at a feature-extraction model");
        }
    }

    Ok(())
}
