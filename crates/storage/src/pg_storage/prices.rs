//! PriceStore implementation for PgStorage.

use async_trait::async_trait;
use labdesk_core::{NewPriceEntry, PRICES_TABLE, PriceEntry};
use sqlx::Row;
use sqlx::postgres::PgRow;

use super::{PgStorage, require_row};
use crate::error::StorageError;
use crate::traits::PriceStore;

const PRICE_COLUMNS: &str = "precio_id::bigint AS precio_id, \
     precio_objetivo_id::bigint AS precio_objetivo_id, precio_tipo_producto, \
     precio::float8 AS precio";

fn row_to_price(row: &PgRow) -> Result<PriceEntry, StorageError> {
    Ok(PriceEntry {
        id: row.try_get("precio_id")?,
        objective_id: row.try_get("precio_objetivo_id")?,
        product_type: row.try_get("precio_tipo_producto")?,
        price: row.try_get("precio")?,
    })
}

#[async_trait]
impl PriceStore for PgStorage {
    async fn list_prices(&self) -> Result<Vec<PriceEntry>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PRICE_COLUMNS} FROM {PRICES_TABLE} ORDER BY precio_id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_price).collect()
    }

    async fn list_prices_for_objective(
        &self,
        objective_id: i64,
    ) -> Result<Vec<PriceEntry>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PRICE_COLUMNS} FROM {PRICES_TABLE}
             WHERE precio_objetivo_id = $1 ORDER BY precio_id ASC"
        ))
        .bind(objective_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_price).collect()
    }

    async fn update_price(&self, price_id: i64, price: Option<f64>) -> Result<(), StorageError> {
        let result =
            sqlx::query(&format!("UPDATE {PRICES_TABLE} SET precio = $1 WHERE precio_id = $2"))
                .bind(price)
                .bind(price_id)
                .execute(&self.pool)
                .await?;
        require_row(result.rows_affected(), "price", price_id)
    }

    async fn insert_price(&self, entry: &NewPriceEntry) -> Result<i64, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO {PRICES_TABLE} (precio_objetivo_id, precio_tipo_producto, precio)
             VALUES ($1,$2,$3)
             RETURNING precio_id::bigint"
        ))
        .bind(entry.objective_id)
        .bind(entry.category.canonical_label())
        .bind(entry.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.try_get(0)?)
    }
}
