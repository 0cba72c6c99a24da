//! Postgres implementation of the upsert sink.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder};
use tracing::debug;

use shotseed_core::{RawTable, SgRecord};

use crate::errors::SinkError;
use crate::options::PgOptions;
use crate::sink::Sink;

/// Upsert sink backed by a small Postgres pool.
#[derive(Debug, Clone)]
pub struct PostgresSink {
    pool: PgPool,
}

impl PostgresSink {
    /// Connect to the store described by `options`.
    ///
    /// Any failure here is the connection-failure path; the caller decides
    /// whether to surface it as a fatal error or a friendly diagnostic.
    pub async fn connect(options: &PgOptions) -> Result<Self, SinkError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options.connect_options())
            .await
            .map_err(SinkError::Connection)?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool; integration tests connect on their own terms.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the raw landing tables when they do not exist yet.
    pub async fn ensure_tables(&self) -> Result<(), SinkError> {
        for table in RawTable::ALL {
            sqlx::query(&create_table_sql(table))
                .execute(&self.pool)
                .await?;
        }
        debug!(tables = RawTable::ALL.len(), "raw tables ensured");
        Ok(())
    }

    /// Close the pool, releasing every connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Sink for PostgresSink {
    fn engine(&self) -> &'static str {
        "postgres"
    }

    async fn upsert(&self, table: RawTable, records: &[SgRecord]) -> Result<u64, SinkError> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut builder = upsert_builder(table, records);
        let result = builder.build().execute(&self.pool).await?;
        debug!(
            table = table.table_name(),
            rows = result.rows_affected(),
            "batch upserted"
        );
        Ok(result.rows_affected())
    }
}

fn create_table_sql(table: RawTable) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\
         sg_id BIGINT PRIMARY KEY, \
         data JSONB NOT NULL, \
         synced_at TIMESTAMPTZ NOT NULL DEFAULT NOW())",
        table.table_name()
    )
}

/// Multi-row `INSERT .. ON CONFLICT` statement for one batch. On conflict
/// the attributes are fully replaced and the sync timestamp refreshed.
fn upsert_builder<'a>(table: RawTable, records: &'a [SgRecord]) -> QueryBuilder<'a, Postgres> {
    let mut builder =
        QueryBuilder::new(format!("INSERT INTO {} (sg_id, data) ", table.table_name()));
    builder.push_values(records, |mut b, record| {
        b.push_bind(record.sg_id);
        b.push_bind(&record.data);
    });
    builder.push(" ON CONFLICT (sg_id) DO UPDATE SET data = EXCLUDED.data, synced_at = NOW()");
    builder
}
