//! Error types for footprint-calc

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("API key not configured: set the {0} environment variable")]
    ApiKeyMissing(String),

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("The model returned no candidates. This may be due to safety filters or an API issue")]
    NoCandidates,

    #[error("The model's response was empty")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, Error>;
