// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DorkError {
    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Optimizer returned HTTP {code}: {body}")]
    Status { code: i32, body: String },

    #[error("Optimizer response had no candidate text")]
    MissingCandidate,

    #[error("No API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with DorkError
pub type Result<T> = std::result::Result<T, DorkError>;
