//! Persistence sinks for generated record batches.

pub mod errors;
pub mod options;
pub mod postgres;
pub mod sink;

pub use errors::SinkError;
pub use options::PgOptions;
pub use postgres::PostgresSink;
pub use sink::Sink;
