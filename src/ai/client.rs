//! OpenAI chat completions client for generating 3-bullet summaries.
//!
//! Encapsulates request construction, the single outbound HTTP call,
//! and response decoding. The public [`Summarizer::summarize`]
//! operation never fails with an `Err`: every failure path is folded
//! into a [`SummaryResult`] so callers have one decision point.

use reqwest::Client;
use serde_json::{Value, json};
use tracing::{info, warn};

use super::parse::parse_points;
use super::prompt::build_messages;
use crate::core::config::SummarizerConfig;
use crate::core::models::SummaryResult;
use crate::errors::SummarizeError;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const MAX_TOKENS: u32 = 400;
const TEMPERATURE: f64 = 0.3;

/// Summarization pipeline.
///
/// Holds only the HTTP client and endpoint; configuration is borrowed
/// from the caller per invocation and never stored.
pub struct Summarizer {
    http: Client,
    api_url: String,
}

impl Summarizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the client at an OpenAI-compatible gateway instead of the
    /// default endpoint.
    #[must_use]
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Summarize `text` into at most 3 bullet points.
    ///
    /// Issues one request to the chat completions endpoint using the
    /// caller's credential and model. All failures, including input
    /// validation, transport errors, and malformed responses, are
    /// returned as `SummaryResult { ok: false, .. }` rather than
    /// propagated.
    pub async fn summarize(&self, config: &SummarizerConfig, text: &str) -> SummaryResult {
        match self.try_summarize(config, text).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "summarization failed");
                SummaryResult::failure(e.to_string())
            }
        }
    }

    async fn try_summarize(
        &self,
        config: &SummarizerConfig,
        text: &str,
    ) -> Result<SummaryResult, SummarizeError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        if config.api_key.trim().is_empty() {
            return Err(SummarizeError::MissingCredential);
        }

        let content = self.request_completion(config, trimmed).await?;
        Ok(SummaryResult::success(parse_points(&content)))
    }

    async fn request_completion(
        &self,
        config: &SummarizerConfig,
        text: &str,
    ) -> Result<String, SummarizeError> {
        let request_body = build_request_body(config, text);

        info!(model = %config.model, chars = text.len(), "requesting summary");

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&config.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: prefer the server-supplied message, fall
            // back to the numeric status code.
            let server_message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(Value::as_str)
                        .map(ToString::to_string)
                })
                .filter(|msg| !msg.is_empty());

            return Err(SummarizeError::ApiError(server_message.unwrap_or_else(
                || format!("API request failed: {}", status.as_u16()),
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SummarizeError::ApiError(format!("Failed to parse OpenAI response: {e}")))?;

        Ok(body["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string())
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the chat completions request payload.
pub(crate) fn build_request_body(config: &SummarizerConfig, text: &str) -> Value {
    json!({
        "model": config.model,
        "messages": build_messages(text),
        "max_tokens": MAX_TOKENS,
        "temperature": TEMPERATURE,
        "top_p": 1,
        "frequency_penalty": 0,
        "presence_penalty": 0,
    })
}
