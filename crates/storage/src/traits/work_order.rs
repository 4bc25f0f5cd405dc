use async_trait::async_trait;
use labdesk_core::{MasterViewRow, TestOrderPatch};

use crate::error::StorageError;

/// Reads from the master view and writes to the tables behind it.
#[async_trait]
pub trait WorkOrderStore: Send + Sync {
    /// All master-view rows, newest test first.
    async fn list_master_view(&self) -> Result<Vec<MasterViewRow>, StorageError>;

    /// Apply a column patch to one row of `pruebas_ordenes_trabajo`.
    async fn update_test_order(
        &self,
        test_id: i64,
        patch: &TestOrderPatch,
    ) -> Result<(), StorageError>;

    /// Set `orden_estado_ot` of one work order.
    async fn update_work_order_status(
        &self,
        order_id: i64,
        status: Option<&str>,
    ) -> Result<(), StorageError>;
}
