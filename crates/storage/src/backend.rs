//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use labdesk_core::{
    MasterViewRow, NewPriceEntry, Objective, ObjectiveDetails, PriceEntry, TestOrderPatch,
};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::traits::{ObjectiveStore, PriceStore, WorkOrderStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <MemoryStorage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Memory(MemoryStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[must_use]
    pub fn new_memory(storage: MemoryStorage) -> Self {
        Self::Memory(storage)
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── ObjectiveStore ───────────────────────────────────────────────

#[async_trait]
impl ObjectiveStore for StorageBackend {
    async fn list_objectives(&self) -> Result<Vec<Objective>, StorageError> {
        dispatch!(self, ObjectiveStore, list_objectives())
    }

    async fn update_objective(&self, objective: &Objective) -> Result<(), StorageError> {
        dispatch!(self, ObjectiveStore, update_objective(objective))
    }

    async fn insert_objective(&self, objective: &ObjectiveDetails) -> Result<i64, StorageError> {
        dispatch!(self, ObjectiveStore, insert_objective(objective))
    }
}

// ── PriceStore ───────────────────────────────────────────────────

#[async_trait]
impl PriceStore for StorageBackend {
    async fn list_prices(&self) -> Result<Vec<PriceEntry>, StorageError> {
        dispatch!(self, PriceStore, list_prices())
    }

    async fn list_prices_for_objective(
        &self,
        objective_id: i64,
    ) -> Result<Vec<PriceEntry>, StorageError> {
        dispatch!(self, PriceStore, list_prices_for_objective(objective_id))
    }

    async fn update_price(&self, price_id: i64, price: Option<f64>) -> Result<(), StorageError> {
        dispatch!(self, PriceStore, update_price(price_id, price))
    }

    async fn insert_price(&self, entry: &NewPriceEntry) -> Result<i64, StorageError> {
        dispatch!(self, PriceStore, insert_price(entry))
    }
}

// ── WorkOrderStore ───────────────────────────────────────────────

#[async_trait]
impl WorkOrderStore for StorageBackend {
    async fn list_master_view(&self) -> Result<Vec<MasterViewRow>, StorageError> {
        dispatch!(self, WorkOrderStore, list_master_view())
    }

    async fn update_test_order(
        &self,
        test_id: i64,
        patch: &TestOrderPatch,
    ) -> Result<(), StorageError> {
        dispatch!(self, WorkOrderStore, update_test_order(test_id, patch))
    }

    async fn update_work_order_status(
        &self,
        order_id: i64,
        status: Option<&str>,
    ) -> Result<(), StorageError> {
        dispatch!(self, WorkOrderStore, update_work_order_status(order_id, status))
    }
}
