use std::sync::Arc;

use labdesk_core::{
    NewObjectiveWithPrices, Objective, ObjectiveWithPrices, PriceUpsert, PriceWrite,
    Reconciliation, decompose_create, decompose_update, find_existing_price, reconcile,
    validate_objective,
};
use labdesk_storage::traits::{ObjectiveStore, PriceStore};
use labdesk_storage::{StorageBackend, StorageError};

use crate::error::ServiceError;

/// Reads and writes the objective catalog as objective-with-prices rows.
pub struct CatalogService<S = StorageBackend> {
    storage: Arc<S>,
}

impl<S: ObjectiveStore + PriceStore> CatalogService<S> {
    #[must_use]
    pub const fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// All objectives with their chemical and biological prices, ascending by id.
    ///
    /// Both lists are fetched before reconciling; a failure of either is returned as is.
    pub async fn list_with_prices(&self) -> Result<Vec<ObjectiveWithPrices>, ServiceError> {
        let objectives = self.storage.list_objectives().await?;
        let prices = self.storage.list_prices().await?;
        let Reconciliation { rows, unrecognized, duplicates } = reconcile(&objectives, &prices);

        for skipped in &unrecognized {
            tracing::warn!(
                price_id = skipped.price_id,
                objective_id = ?skipped.objective_id,
                label = ?skipped.label,
                "price with unrecognized product type ignored"
            );
        }
        for dup in &duplicates {
            tracing::warn!(
                objective_id = dup.objective_id,
                category = %dup.category,
                replaced_price_id = dup.replaced_price_id,
                winning_price_id = dup.winning_price_id,
                "duplicate price for category, later row wins"
            );
        }
        tracing::debug!(objectives = rows.len(), prices = prices.len(), "catalog reconciled");
        Ok(rows)
    }

    /// Persist an edited row: the objective first, then one price write per category.
    ///
    /// Writes run in sequence. A failure of the objective update is returned as
    /// a storage error; any later failure is a [`ServiceError::PartialWrite`].
    pub async fn update_with_prices(
        &self,
        row: ObjectiveWithPrices,
    ) -> Result<ObjectiveWithPrices, ServiceError> {
        validate_objective(&row.objective.details, &row.prices)
            .map_err(ServiceError::Validation)?;
        let plan = decompose_update(&row);
        let id = plan.objective.id;

        self.storage.update_objective(&plan.objective).await?;
        let mut completed = vec![format!("objective {id} updated")];

        for upsert in &plan.price_upserts {
            match self.write_price(upsert).await {
                Ok(Some(step)) => completed.push(step),
                Ok(None) => {},
                Err(source) => {
                    tracing::error!(
                        objective_id = id,
                        error = %source,
                        ?completed,
                        "price write failed after objective update"
                    );
                    return Err(ServiceError::PartialWrite {
                        entity: "objective",
                        id,
                        completed,
                        source,
                    });
                },
            }
        }

        tracing::info!(objective_id = id, steps = completed.len(), "objective updated");
        Ok(row)
    }

    /// Insert a new objective, then a price row for each price that is set.
    ///
    /// Returns the stored row with its generated id.
    pub async fn create_with_prices(
        &self,
        row: NewObjectiveWithPrices,
    ) -> Result<ObjectiveWithPrices, ServiceError> {
        validate_objective(&row.details, &row.prices).map_err(ServiceError::Validation)?;
        let prices = row.prices;
        let plan = decompose_create(row);

        let id = self.storage.insert_objective(&plan.objective).await?;
        let mut completed = vec![format!("objective {id} inserted")];

        for entry in plan.price_inserts(id) {
            match self.storage.insert_price(&entry).await {
                Ok(price_id) => {
                    completed.push(format!("{} price {price_id} inserted", entry.category));
                },
                Err(source) => {
                    tracing::error!(
                        objective_id = id,
                        error = %source,
                        ?completed,
                        "price insert failed after objective insert"
                    );
                    return Err(ServiceError::PartialWrite {
                        entity: "objective",
                        id,
                        completed,
                        source,
                    });
                },
            }
        }

        tracing::info!(objective_id = id, steps = completed.len(), "objective created");
        Ok(ObjectiveWithPrices { objective: Objective::new(id, plan.objective), prices })
    }

    /// Resolve one upsert against the stored prices and write it.
    /// Returns a description of the write, or `None` when nothing was needed.
    async fn write_price(&self, upsert: &PriceUpsert) -> Result<Option<String>, StorageError> {
        let stored = self.storage.list_prices_for_objective(upsert.objective_id).await?;
        let existing = find_existing_price(&stored, upsert.objective_id, upsert.category);
        match upsert.resolve(existing) {
            PriceWrite::Update { price_id, price } => {
                self.storage.update_price(price_id, price).await?;
                Ok(Some(format!("{} price {price_id} updated", upsert.category)))
            },
            PriceWrite::Insert(entry) => {
                let price_id = self.storage.insert_price(&entry).await?;
                Ok(Some(format!("{} price {price_id} inserted", upsert.category)))
            },
            PriceWrite::Skip => Ok(None),
        }
    }
}
