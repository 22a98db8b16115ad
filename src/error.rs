// Error types for gitlab-reviewer.
// Handles GitLab API errors, cache errors, and local git failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewerError {
    #[error("GitLab API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("GitLab API returned status {status}: {preview}")]
    ApiStatus { status: u16, preview: String },

    #[error("no active members found in API response")]
    NoActiveMembers,

    #[error("could not read token from {path}: {source}")]
    MissingToken {
        path: String,
        source: std::io::Error,
    },

    #[error("token file {path} is empty")]
    EmptyToken { path: String },

    #[error("not a recognized remote format: {0}")]
    UnrecognizedRemote(String),

    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error("cache is stale")]
    CacheStale,

    #[error("cache is empty")]
    CacheEmpty,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReviewerError>;
