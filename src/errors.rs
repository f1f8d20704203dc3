use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("No text provided")]
    EmptyInput,

    #[error("No API key provided")]
    MissingCredential,

    #[error("{0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::HttpError(error.to_string())
    }
}
