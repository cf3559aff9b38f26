//! Muninn error types

/// Muninn error types
#[derive(Debug, thiserror::Error)]
pub enum MuninnError {
    // Request errors
    /// The request carried no `input` message list.
    #[error("request is missing the 'input' field")]
    MissingInput,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Reasoning-loop contract errors
    /// The loop emitted a message kind this adapter does not recognize.
    /// Fatal: signals a contract breach between the adapter and the loop.
    #[error("unrecognized message kind from reasoning loop: {0}")]
    UnrecognizedMessage(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Backend/tool errors (surfaced unwrapped from the external loop)
    #[error("backend error: {0}")]
    Backend(String),

    #[error("tool error: {0}")]
    Tool(String),

    // Catalog transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // Registration errors
    #[error("a model is already registered")]
    AlreadyRegistered,
}

impl From<reqwest::Error> for MuninnError {
    fn from(err: reqwest::Error) -> Self {
        MuninnError::Http(err.to_string())
    }
}

/// Result type alias for muninn operations
pub type Result<T> = std::result::Result<T, MuninnError>;
