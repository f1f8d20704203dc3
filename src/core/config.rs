use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Closed set of supported model identifiers.
///
/// `HighAccuracy` is the default and trades latency for quality;
/// `Fast` is the cheaper, quicker variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    HighAccuracy,
    Fast,
}

impl Model {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Model::HighAccuracy => "gpt-4o",
            Model::Fast => "gpt-3.5-turbo",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpt-4o" => Ok(Model::HighAccuracy),
            "gpt-3.5-turbo" => Ok(Model::Fast),
            other => Err(format!("Unsupported model: {other}")),
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Caller-owned summarizer configuration.
///
/// The pipeline borrows this for the duration of a single call and
/// never stores it. At most one call should be in flight against a
/// given instance; the caller serializes concurrent use.
#[derive(Clone)]
pub struct SummarizerConfig {
    pub api_key: String,
    pub model: Model,
}

impl SummarizerConfig {
    #[must_use]
    pub fn new(api_key: String, model: Model) -> Self {
        Self { api_key, model }
    }

    /// Read configuration from `OPENAI_API_KEY` and optional
    /// `OPENAI_MODEL`.
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|e| format!("OPENAI_API_KEY: {e}"))?;
        let model = match env::var("OPENAI_MODEL") {
            Ok(name) => name.parse()?,
            Err(_) => Model::default(),
        };
        Ok(Self { api_key, model })
    }

    /// Merge a partial update into this configuration.
    ///
    /// Only the supplied fields are replaced; the merged result is not
    /// re-validated and in-flight calls are unaffected.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(api_key) = update.api_key {
            self.api_key = api_key;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
    }
}

// Manual Debug so the credential never ends up in logs.
impl fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .finish()
    }
}

/// Partial configuration update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub api_key: Option<String>,
    pub model: Option<Model>,
}
