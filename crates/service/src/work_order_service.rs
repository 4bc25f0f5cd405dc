use std::sync::Arc;

use labdesk_core::{EditableFields, MasterViewRow, WorkOrderEditPlan, plan_work_order_edit};
use labdesk_storage::StorageBackend;
use labdesk_storage::traits::WorkOrderStore;

use crate::error::ServiceError;

/// Reads the master work-order view and applies grid edits to it.
pub struct WorkOrderService<S = StorageBackend> {
    storage: Arc<S>,
}

impl<S: WorkOrderStore> WorkOrderService<S> {
    #[must_use]
    pub const fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// All master-view rows, newest test first.
    pub async fn list_master_view(&self) -> Result<Vec<MasterViewRow>, ServiceError> {
        let rows = self.storage.list_master_view().await?;
        tracing::debug!(rows = rows.len(), "master view fetched");
        Ok(rows)
    }

    /// Write the edited columns of one master-view row.
    ///
    /// The test-row columns are written first, then the work-order status.
    /// Returns the plan that was executed so the caller can update its cache.
    pub async fn update_editable_fields(
        &self,
        test_id: i64,
        order_id: Option<i64>,
        fields: EditableFields,
    ) -> Result<WorkOrderEditPlan, ServiceError> {
        let plan = plan_work_order_edit(test_id, order_id, fields);
        if plan.is_noop() {
            tracing::debug!(test_id, "master view edit has no effect");
            return Ok(plan);
        }

        let mut completed = Vec::new();
        if let Some(patch) = &plan.test_patch {
            self.storage.update_test_order(test_id, patch).await?;
            completed.push(format!("test order {test_id} updated"));
        }
        if let Some((order_id, status)) = &plan.status_update {
            if let Err(source) =
                self.storage.update_work_order_status(*order_id, status.as_deref()).await
            {
                if completed.is_empty() {
                    return Err(source.into());
                }
                tracing::error!(test_id, order_id, error = %source, "work-order status write failed");
                return Err(ServiceError::PartialWrite {
                    entity: "test order",
                    id: test_id,
                    completed,
                    source,
                });
            }
            completed.push(format!("work order {order_id} status updated"));
        }

        tracing::info!(test_id, steps = completed.len(), "master view row updated");
        Ok(plan)
    }
}
