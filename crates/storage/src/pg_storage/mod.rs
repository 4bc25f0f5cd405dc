//! Hosted Postgres tables for objectives, prices and work orders, via sqlx.
//!
//! Split into modular files by table.

mod objectives;
mod prices;
mod work_orders;

use std::time::Duration;

use labdesk_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS, TestType,
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::StorageError;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect to an existing database. The schema is not touched.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Parse `TestType` from a text column. Unknown labels are logged and dropped.
pub(crate) fn parse_pg_test_type(objective_id: i64, s: Option<&str>) -> Option<TestType> {
    let s = s?;
    s.parse().map_or_else(
        |_| {
            tracing::warn!(objective_id, invalid_type = %s, "unknown objetivo_tipo_prueba, ignoring");
            None
        },
        Some,
    )
}

/// Map a zero-row UPDATE to `NotFound`.
pub(crate) fn require_row(
    rows_affected: u64,
    entity: &'static str,
    id: i64,
) -> Result<(), StorageError> {
    if rows_affected == 0 { Err(StorageError::not_found(entity, id)) } else { Ok(()) }
}
