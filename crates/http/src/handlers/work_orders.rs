use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use labdesk_core::MasterViewRow;
use labdesk_service::MASTER_VIEW_KEY;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{WorkOrderEditRequest, WorkOrderEditResponse};

pub async fn list_work_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MasterViewRow>>, ApiError> {
    {
        let cache = state.master_view_cache.read().await;
        if let Some(rows) = cache.get_fresh(&MASTER_VIEW_KEY, state.cache_max_age) {
            return Ok(Json(rows.to_vec()));
        }
    }
    refresh(&state).await.map(Json)
}

pub async fn refresh_work_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MasterViewRow>>, ApiError> {
    refresh(&state).await.map(Json)
}

pub async fn update_work_order(
    State(state): State<Arc<AppState>>,
    Path(test_id): Path<i64>,
    Json(req): Json<WorkOrderEditRequest>,
) -> Result<Json<WorkOrderEditResponse>, ApiError> {
    let WorkOrderEditRequest { prueba_orden_id, fields } = req;
    let result = state.work_orders.update_editable_fields(test_id, prueba_orden_id, fields).await;
    let plan = match result {
        Ok(plan) => plan,
        Err(e) => {
            if e.requires_refetch() {
                state.master_view_cache.write().await.invalidate(&MASTER_VIEW_KEY);
            }
            return Err(e.into());
        },
    };

    let mut cache = state.master_view_cache.write().await;
    if plan.status_update.is_some() {
        // other rows of the same work order show the status too
        cache.invalidate(&MASTER_VIEW_KEY);
    } else if let Some(patch) = &plan.test_patch {
        let cached = cache
            .get(&MASTER_VIEW_KEY)
            .and_then(|rows| rows.iter().find(|r| r.prueba_id == Some(test_id)))
            .cloned();
        let patched = cached.map(|mut row| {
            row.apply_test_patch(patch);
            row
        });
        if !patched.is_some_and(|row| cache.apply_update(&MASTER_VIEW_KEY, row)) {
            cache.invalidate(&MASTER_VIEW_KEY);
        }
    }

    Ok(Json(WorkOrderEditResponse {
        prueba_id: test_id,
        test_updated: plan.test_patch.is_some(),
        status_updated: plan.status_update.is_some(),
    }))
}

async fn refresh(state: &AppState) -> Result<Vec<MasterViewRow>, ApiError> {
    let rows = state.work_orders.list_master_view().await?;
    state.master_view_cache.write().await.store(MASTER_VIEW_KEY, rows.clone());
    Ok(rows)
}
