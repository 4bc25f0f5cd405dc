//! HTTP API server for labdesk.

#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post, put};
use axum::{Json, Router};
use labdesk_core::{MasterViewRow, ObjectiveWithPrices};
use labdesk_service::{CatalogService, QueryCache, WorkOrderService};
use labdesk_storage::StorageBackend;
use labdesk_updater::UpdateChecker;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use api_types::{VersionResponse, WorkOrderEditRequest, WorkOrderEditResponse};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for sharing across handlers. Each grid's list lives in
/// its own cache; handlers decide when to refresh, patch or drop it.
pub struct AppState {
    pub catalog: CatalogService,
    pub work_orders: WorkOrderService,
    pub objectives_cache: RwLock<QueryCache<&'static str, ObjectiveWithPrices>>,
    pub master_view_cache: RwLock<QueryCache<&'static str, MasterViewRow>>,
    /// Lists older than this are re-fetched on read.
    pub cache_max_age: Duration,
    pub updater: UpdateChecker,
}

impl AppState {
    #[must_use]
    pub fn new(storage: StorageBackend, updater: UpdateChecker, cache_max_age: Duration) -> Self {
        let storage = Arc::new(storage);
        Self {
            catalog: CatalogService::new(Arc::clone(&storage)),
            work_orders: WorkOrderService::new(storage),
            objectives_cache: RwLock::new(QueryCache::new()),
            master_view_cache: RwLock::new(QueryCache::new()),
            cache_max_age,
            updater,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/objectives",
            get(handlers::objectives::list_objectives).post(handlers::objectives::create_objective),
        )
        .route("/api/objectives/refresh", post(handlers::objectives::refresh_objectives))
        .route("/api/objectives/{id}", put(handlers::objectives::update_objective))
        .route("/api/work-orders", get(handlers::work_orders::list_work_orders))
        .route("/api/work-orders/refresh", post(handlers::work_orders::refresh_work_orders))
        .route("/api/work-orders/{test_id}", put(handlers::work_orders::update_work_order))
        .route("/api/update", get(handlers::update::update_status))
        .route("/api/update/check", post(handlers::update::check_update))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
