use thiserror::Error;

/// Errors surfaced by the persistence sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The store could not be reached while opening the connection.
    #[error("connection failed: {0}")]
    Connection(#[source] sqlx::Error),
    /// A statement failed after the connection was established.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}
