//! Error types for design generation.
//!
//! Both gateway operations fail with [`GenerationError`]; the session
//! recovers these at its boundary and surfaces a per-sub-flow message
//! instead of the raw provider payload.

use thiserror::Error;

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Failure modes of a single generation request.
///
/// Transport failures and provider-shape failures are deliberately not
/// distinguished by callers: the session treats every variant as "this
/// sub-flow failed".
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The HTTP call itself failed (connect, timeout, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response carried no text payload to parse.
    #[error("provider response carried no text payload")]
    EmptyPayload,

    /// The text payload did not conform to the content schema.
    #[error("payload failed schema validation: {0}")]
    InvalidShape(#[from] serde_json::Error),

    /// No response part carried decodable inline image data.
    #[error("no image data found in response")]
    NoImageData,
}
