//! In-process store with the same ordering and constraint behaviour as the
//! hosted tables. Backs the demo server and the service tests.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use labdesk_core::{
    MasterViewRow, NewPriceEntry, Objective, ObjectiveDetails, PriceEntry, TestOrderPatch,
    TestType,
};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{ObjectiveStore, PriceStore, WorkOrderStore};

#[derive(Debug, Default)]
struct Tables {
    objectives: Vec<Objective>,
    prices: Vec<PriceEntry>,
    master_view: Vec<MasterViewRow>,
}

/// Cloneable handle to shared in-memory tables.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    tables: Arc<RwLock<Tables>>,
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0).saturating_add(1)
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding the given rows. Prices keep the given order.
    #[must_use]
    pub fn with_rows(
        objectives: Vec<Objective>,
        prices: Vec<PriceEntry>,
        master_view: Vec<MasterViewRow>,
    ) -> Self {
        Self { tables: Arc::new(RwLock::new(Tables { objectives, prices, master_view })) }
    }

    /// A small catalog and work-order list for running the console without a database.
    #[must_use]
    pub fn demo() -> Self {
        let objective = |id: i64, name: &str, test_type: TestType, days: i32| {
            Objective::new(
                id,
                ObjectiveDetails::named(name).with_test_type(test_type).with_turnaround_days(days),
            )
        };
        let price = |id: i64, objective_id: i64, label: &str, value: f64| PriceEntry {
            id,
            objective_id: Some(objective_id),
            product_type: Some(label.to_owned()),
            price: value,
        };
        let test = |prueba_id: i64, order_id: i64, objective: &str, status: &str| MasterViewRow {
            prueba_id: Some(prueba_id),
            prueba_orden_id: Some(order_id),
            objetivo_nombre: Some(objective.to_owned()),
            prueba_estado_lab: Some(status.to_owned()),
            estado_ot: Some("Abierta".to_owned()),
            ..MasterViewRow::default()
        };
        Self::with_rows(
            vec![
                objective(1, "Botrytis cinerea", TestType::Efficacy, 21),
                objective(2, "Residualidad en follaje", TestType::Residuality, 30),
                objective(3, "Fitotoxicidad en plántulas", TestType::Phytotoxicity, 14),
            ],
            vec![
                price(1, 1, "Químico", 500.0),
                price(2, 1, "Biológico", 700.0),
                price(3, 2, "quimico", 450.0),
            ],
            vec![
                test(1, 1, "Botrytis cinerea", "Recibida"),
                test(2, 1, "Residualidad en follaje", "En proceso"),
            ],
        )
    }
}

#[async_trait]
impl ObjectiveStore for MemoryStorage {
    async fn list_objectives(&self) -> Result<Vec<Objective>, StorageError> {
        let mut objectives = self.tables.read().await.objectives.clone();
        objectives.sort_by_key(|o| o.id);
        Ok(objectives)
    }

    async fn update_objective(&self, objective: &Objective) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .objectives
            .iter_mut()
            .find(|o| o.id == objective.id)
            .ok_or_else(|| StorageError::not_found("objective", objective.id))?;
        *row = objective.clone();
        Ok(())
    }

    async fn insert_objective(&self, objective: &ObjectiveDetails) -> Result<i64, StorageError> {
        let mut tables = self.tables.write().await;
        let id = next_id(tables.objectives.iter().map(|o| o.id));
        tables.objectives.push(Objective::new(id, objective.clone()));
        Ok(id)
    }
}

#[async_trait]
impl PriceStore for MemoryStorage {
    async fn list_prices(&self) -> Result<Vec<PriceEntry>, StorageError> {
        Ok(self.tables.read().await.prices.clone())
    }

    async fn list_prices_for_objective(
        &self,
        objective_id: i64,
    ) -> Result<Vec<PriceEntry>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.prices.iter().filter(|p| p.objective_id == Some(objective_id)).cloned().collect())
    }

    async fn update_price(&self, price_id: i64, price: Option<f64>) -> Result<(), StorageError> {
        let Some(price) = price else {
            return Err(StorageError::Constraint(
                "null value in column \"precio\" violates not-null constraint".to_owned(),
            ));
        };
        let mut tables = self.tables.write().await;
        let row = tables
            .prices
            .iter_mut()
            .find(|p| p.id == price_id)
            .ok_or_else(|| StorageError::not_found("price", price_id))?;
        row.price = price;
        Ok(())
    }

    async fn insert_price(&self, entry: &NewPriceEntry) -> Result<i64, StorageError> {
        let mut tables = self.tables.write().await;
        if !tables.objectives.iter().any(|o| o.id == entry.objective_id) {
            return Err(StorageError::Constraint(format!(
                "objective {} referenced by price does not exist",
                entry.objective_id
            )));
        }
        let id = next_id(tables.prices.iter().map(|p| p.id));
        tables.prices.push(PriceEntry {
            id,
            objective_id: Some(entry.objective_id),
            product_type: Some(entry.category.canonical_label().to_owned()),
            price: entry.price,
        });
        Ok(id)
    }
}

#[async_trait]
impl WorkOrderStore for MemoryStorage {
    async fn list_master_view(&self) -> Result<Vec<MasterViewRow>, StorageError> {
        let mut rows = self.tables.read().await.master_view.clone();
        // DESC NULLS LAST
        rows.sort_by(|a, b| match (a.prueba_id, b.prueba_id) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        Ok(rows)
    }

    async fn update_test_order(
        &self,
        test_id: i64,
        patch: &TestOrderPatch,
    ) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .master_view
            .iter_mut()
            .find(|r| r.prueba_id == Some(test_id))
            .ok_or_else(|| StorageError::not_found("test order", test_id))?;
        row.apply_test_patch(patch);
        Ok(())
    }

    async fn update_work_order_status(
        &self,
        order_id: i64,
        status: Option<&str>,
    ) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        let mut matched = false;
        for row in tables.master_view.iter_mut().filter(|r| r.prueba_orden_id == Some(order_id)) {
            row.estado_ot = status.map(str::to_owned);
            matched = true;
        }
        if matched { Ok(()) } else { Err(StorageError::not_found("work order", order_id)) }
    }
}
