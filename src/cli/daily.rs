//! CLI `daily` command: show which word daily mode selects for a date.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use semantle::config::SemantleConfig;
use semantle::words::WordSource;

/// Print the daily word for `date` (today if omitted).
pub fn daily(config: &SemantleConfig, date: Option<&str>) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let words = WordSource::from_config(&config.words)?;
    let index = words.daily_index(date);

    println!("Date:       {date}");
    println!("Pool size:  {}", words.pool_size());
    println!("Index:      {index}");
    println!("Word:       {}", words.daily_word(date));
    Ok(())
}
