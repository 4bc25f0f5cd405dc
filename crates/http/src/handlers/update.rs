use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use labdesk_updater::UpdateStatus;

use crate::AppState;

pub async fn update_status(State(state): State<Arc<AppState>>) -> Json<UpdateStatus> {
    Json(state.updater.status().await)
}

/// User-initiated check; failures are logged and reported as no update.
pub async fn check_update(State(state): State<Arc<AppState>>) -> Json<UpdateStatus> {
    Json(state.updater.check_now(false).await)
}
