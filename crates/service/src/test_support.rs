//! Store wrapper that fails chosen operations, for exercising partial writes.

use std::sync::Mutex;

use async_trait::async_trait;
use labdesk_core::{
    MasterViewRow, NewPriceEntry, Objective, ObjectiveDetails, PriceEntry, TestOrderPatch,
};
use labdesk_storage::traits::{ObjectiveStore, PriceStore, WorkOrderStore};
use labdesk_storage::{MemoryStorage, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    ListObjectives,
    ListPrices,
    UpdateObjective,
    InsertObjective,
    UpdatePrice,
    InsertPrice,
    UpdateTestOrder,
    UpdateWorkOrderStatus,
}

/// Delegates to a [`MemoryStorage`] and fails every call of the armed operations.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: MemoryStorage,
    failing: Mutex<Vec<Op>>,
    calls: Mutex<Vec<Op>>,
}

impl FailingStore {
    pub fn new(inner: MemoryStorage) -> Self {
        Self { inner, ..Self::default() }
    }

    pub fn fail_on(&self, op: Op) {
        self.failing.lock().unwrap().push(op);
    }

    /// Write operations attempted so far, in order.
    pub fn writes(&self) -> Vec<Op> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .copied()
            .filter(|op| !matches!(op, Op::ListObjectives | Op::ListPrices))
            .collect()
    }

    fn check(&self, op: Op) -> Result<(), StorageError> {
        self.calls.lock().unwrap().push(op);
        if self.failing.lock().unwrap().contains(&op) {
            Err(StorageError::Constraint(format!("injected failure on {op:?}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ObjectiveStore for FailingStore {
    async fn list_objectives(&self) -> Result<Vec<Objective>, StorageError> {
        self.check(Op::ListObjectives)?;
        self.inner.list_objectives().await
    }

    async fn update_objective(&self, objective: &Objective) -> Result<(), StorageError> {
        self.check(Op::UpdateObjective)?;
        self.inner.update_objective(objective).await
    }

    async fn insert_objective(&self, objective: &ObjectiveDetails) -> Result<i64, StorageError> {
        self.check(Op::InsertObjective)?;
        self.inner.insert_objective(objective).await
    }
}

#[async_trait]
impl PriceStore for FailingStore {
    async fn list_prices(&self) -> Result<Vec<PriceEntry>, StorageError> {
        self.check(Op::ListPrices)?;
        self.inner.list_prices().await
    }

    async fn list_prices_for_objective(
        &self,
        objective_id: i64,
    ) -> Result<Vec<PriceEntry>, StorageError> {
        self.check(Op::ListPrices)?;
        self.inner.list_prices_for_objective(objective_id).await
    }

    async fn update_price(&self, price_id: i64, price: Option<f64>) -> Result<(), StorageError> {
        self.check(Op::UpdatePrice)?;
        self.inner.update_price(price_id, price).await
    }

    async fn insert_price(&self, entry: &NewPriceEntry) -> Result<i64, StorageError> {
        self.check(Op::InsertPrice)?;
        self.inner.insert_price(entry).await
    }
}

#[async_trait]
impl WorkOrderStore for FailingStore {
    async fn list_master_view(&self) -> Result<Vec<MasterViewRow>, StorageError> {
        self.inner.list_master_view().await
    }

    async fn update_test_order(
        &self,
        test_id: i64,
        patch: &TestOrderPatch,
    ) -> Result<(), StorageError> {
        self.check(Op::UpdateTestOrder)?;
        self.inner.update_test_order(test_id, patch).await
    }

    async fn update_work_order_status(
        &self,
        order_id: i64,
        status: Option<&str>,
    ) -> Result<(), StorageError> {
        self.check(Op::UpdateWorkOrderStatus)?;
        self.inner.update_work_order_status(order_id, status).await
    }
}
