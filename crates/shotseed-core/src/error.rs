use thiserror::Error;

/// Core error type shared across Shotseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Entity attributes could not be flattened into a JSON payload.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience alias for results returned by Shotseed crates.
pub type Result<T> = std::result::Result<T, Error>;
