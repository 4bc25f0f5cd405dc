use labdesk_core::EditableFields;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Body of a master-view edit: the row's work order plus the changed columns.
#[derive(Debug, Deserialize)]
pub struct WorkOrderEditRequest {
    #[serde(default)]
    pub prueba_orden_id: Option<i64>,
    #[serde(flatten)]
    pub fields: EditableFields,
}

#[derive(Debug, Serialize)]
pub struct WorkOrderEditResponse {
    pub prueba_id: i64,
    pub test_updated: bool,
    pub status_updated: bool,
}
