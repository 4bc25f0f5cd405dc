use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use labdesk_core::{NewObjectiveWithPrices, ObjectiveWithPrices};
use labdesk_service::OBJECTIVES_KEY;

use crate::AppState;
use crate::api_error::ApiError;

pub async fn list_objectives(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ObjectiveWithPrices>>, ApiError> {
    {
        let cache = state.objectives_cache.read().await;
        if let Some(rows) = cache.get_fresh(&OBJECTIVES_KEY, state.cache_max_age) {
            return Ok(Json(rows.to_vec()));
        }
    }
    refresh(&state).await.map(Json)
}

pub async fn refresh_objectives(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ObjectiveWithPrices>>, ApiError> {
    refresh(&state).await.map(Json)
}

pub async fn update_objective(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(row): Json<ObjectiveWithPrices>,
) -> Result<Json<ObjectiveWithPrices>, ApiError> {
    if row.id() != id {
        return Err(ApiError::BadRequest(format!(
            "objetivo_id {} does not match path id {id}",
            row.id()
        )));
    }
    match state.catalog.update_with_prices(row).await {
        Ok(saved) => {
            let mut cache = state.objectives_cache.write().await;
            if !cache.apply_update(&OBJECTIVES_KEY, saved.clone()) {
                cache.invalidate(&OBJECTIVES_KEY);
            }
            Ok(Json(saved))
        },
        Err(e) => {
            if e.requires_refetch() {
                state.objectives_cache.write().await.invalidate(&OBJECTIVES_KEY);
            }
            Err(e.into())
        },
    }
}

pub async fn create_objective(
    State(state): State<Arc<AppState>>,
    Json(row): Json<NewObjectiveWithPrices>,
) -> Result<(StatusCode, Json<ObjectiveWithPrices>), ApiError> {
    match state.catalog.create_with_prices(row).await {
        Ok(created) => {
            state.objectives_cache.write().await.invalidate(&OBJECTIVES_KEY);
            Ok((StatusCode::CREATED, Json(created)))
        },
        Err(e) => {
            if e.requires_refetch() {
                state.objectives_cache.write().await.invalidate(&OBJECTIVES_KEY);
            }
            Err(e.into())
        },
    }
}

async fn refresh(state: &AppState) -> Result<Vec<ObjectiveWithPrices>, ApiError> {
    let rows = state.catalog.list_with_prices().await?;
    state.objectives_cache.write().await.store(OBJECTIVES_KEY, rows.clone());
    Ok(rows)
}
