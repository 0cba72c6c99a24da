use async_trait::async_trait;

use shotseed_core::{RawTable, SgRecord};

use crate::errors::SinkError;

/// Trait implemented by stores that can absorb seeded record batches.
#[async_trait]
pub trait Sink {
    /// Returns the engine identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Idempotently upsert one batch keyed by `sg_id`: on conflict the
    /// attributes are fully replaced and the sync timestamp refreshed.
    /// Returns the number of rows written.
    async fn upsert(&self, table: RawTable, records: &[SgRecord]) -> Result<u64, SinkError>;
}
