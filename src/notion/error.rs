//! Error types for the Notion client

use thiserror::Error;

/// Errors surfaced by the Notion API client
#[derive(Debug, Error)]
pub enum NotionError {
    /// Transport-level failure talking to the API
    #[error("notion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("notion api returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("failed to decode notion response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No published post matches the requested slug
    #[error("no post found with slug: {0}")]
    PostNotFound(String),

    /// Required configuration is missing or malformed
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}
