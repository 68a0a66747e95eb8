//! Error types for game store interactions.

/// Failure of a single round trip to the game store.
///
/// Network failures, non-success statuses and malformed bodies are all
/// reported through this one type; the collection never distinguishes them.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
