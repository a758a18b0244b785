//! CLI `similarity` command: compare two words through the embedding provider.

use anyhow::Result;

use semantle::config::SemantleConfig;
use semantle::game::GameEngine;
use semantle::words::WordSource;

pub async fn similarity(config: &SemantleConfig, word1: &str, word2: &str) -> Result<()> {
    let gateway = semantle::server::build_gateway(config)?;
    let engine = GameEngine::new(gateway, WordSource::builtin());

    let report = engine.similarity(word1, word2).await?;

    println!("{} <-> {}", report.word1, report.word2);
    println!("  raw cosine:     {:.4}", report.raw_similarity);
    println!("  similarity:     {:.2} / 100", report.similarity);
    println!(
        "  in-game score:  {:.2}",
        semantle::game::ranking::game_similarity(report.raw_similarity)
    );
    Ok(())
}
