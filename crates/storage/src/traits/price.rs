use async_trait::async_trait;
use labdesk_core::{NewPriceEntry, PriceEntry};

use crate::error::StorageError;

/// Operations on `precios_objetivo_tipo`.
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// All price rows, in store order.
    async fn list_prices(&self) -> Result<Vec<PriceEntry>, StorageError>;

    /// Price rows owned by one objective, in store order.
    async fn list_prices_for_objective(
        &self,
        objective_id: i64,
    ) -> Result<Vec<PriceEntry>, StorageError>;

    /// Set the price of an existing row. `None` writes NULL, which the
    /// column rejects.
    async fn update_price(&self, price_id: i64, price: Option<f64>) -> Result<(), StorageError>;

    /// Insert a price row labelled with the category's canonical label.
    async fn insert_price(&self, entry: &NewPriceEntry) -> Result<i64, StorageError>;
}
