//! Error Types

use thiserror::Error;

/// Result type alias for client-side operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client integration errors
///
/// Every failure path in the browser crates routes through this type so it
/// can be handed to a logging collaborator instead of vanishing as an
/// unhandled rejection.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response or payload was not the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required configuration meta tag is missing from the page
    #[error("missing meta tag: {0}")]
    MissingMeta(&'static str),

    /// The return page was loaded without a session_id query parameter
    #[error("missing session_id query parameter")]
    MissingSessionId,

    /// The checkout page path carried no plan id segment
    #[error("no plan id in page path")]
    MissingPlanId,

    /// A call across the JS boundary failed
    #[error("JS interop error: {0}")]
    Interop(String),
}
