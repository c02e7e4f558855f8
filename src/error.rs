use thiserror::Error;

/// Failure modes shared by every tool in this crate.
///
/// Scripts fail fast: the first error propagates out of `main` and
/// terminates the run. Nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// A required credential or setting is missing. Present-but-empty
    /// environment variables count as missing.
    #[error("missing configuration: {0}")]
    Configuration(String),

    /// The API answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// Local asset store failure.
    #[error("asset store error: {0}")]
    Store(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
