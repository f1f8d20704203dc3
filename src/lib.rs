//! Tribrief - summarizes free text into three bullet points using the
//! OpenAI chat completions API.
//!
//! The crate is a single pipeline: build a fixed prompt around the
//! caller's text, issue one completion request with the caller's
//! credential and model choice, and parse the returned content into at
//! most 3 summary points (with a sentence-splitting fallback when the
//! model skips the bullet format). The public operation never fails
//! with an error value; every outcome is a [`SummaryResult`] with a
//! success flag.
//!
//! # Example
//!
//! ```no_run
//! use tribrief::{Model, Summarizer, SummarizerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     tribrief::setup_logging();
//!
//!     let config = SummarizerConfig::new("sk-...".to_string(), Model::HighAccuracy);
//!     let summarizer = Summarizer::new();
//!
//!     let result = summarizer.summarize(&config, "Long article text...").await;
//!     if result.ok {
//!         for point in &result.points {
//!             println!("\u{2022} {point}");
//!         }
//!     } else {
//!         eprintln!("{}", result.reason.unwrap_or_default());
//!     }
//! }
//! ```

pub mod ai;
pub mod core;
pub mod errors;

pub use crate::ai::client::Summarizer;
pub use crate::core::config::{ConfigUpdate, Model, SummarizerConfig};
pub use crate::core::models::SummaryResult;
pub use crate::errors::SummarizeError;

/// Configure structured logging for binaries consuming the pipeline.
///
/// Sets up a tracing-subscriber fmt layer; call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
