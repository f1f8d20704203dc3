use std::env;
use std::fs;
use std::io::Read;

use anyhow::{Context, Result, bail};
use tribrief::{Summarizer, SummarizerConfig};

/// CLI front end for the summarization pipeline.
///
/// Reads the text from a file path argument (or stdin when no argument
/// is given) and the credential/model from `OPENAI_API_KEY` /
/// `OPENAI_MODEL`. Prints the bullet points followed by display-only
/// metrics (input word count, compression ratio).
#[tokio::main]
async fn main() -> Result<()> {
    tribrief::setup_logging();

    let config = SummarizerConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let summarizer = Summarizer::new();
    let result = summarizer.summarize(&config, &text).await;

    if !result.ok {
        bail!(
            result
                .reason
                .unwrap_or_else(|| "Unknown error occurred".to_string())
        );
    }

    for point in &result.points {
        println!("\u{2022} {point}");
    }

    let word_count = text.split_whitespace().count().max(1);
    let summary_chars = result.points.join(" ").chars().count();
    let compression = (summary_chars as f64 / word_count as f64 * 100.0).round();

    println!();
    println!(
        "Generated {} summary points \u{2022} Original: {} words \u{2022} {}% compression ratio",
        result.points.len(),
        word_count,
        compression
    );

    Ok(())
}
