use std::sync::Arc;

use anyhow::Result;
use labdesk_core::ConsoleConfig;
use labdesk_http::{AppState, create_router};
use labdesk_updater::{UpdateChecker, UpdateClient};

use crate::open_storage;

pub(crate) async fn run(config: &ConsoleConfig, memory: bool, host: &str, port: u16) -> Result<()> {
    let storage = open_storage(memory, config).await?;
    tracing::info!(backend = storage.kind(), "storage ready");

    let client = match config.update_url.as_deref() {
        Some(url) => Some(UpdateClient::new(url)?),
        None => {
            tracing::info!("LABDESK_UPDATE_URL not set, update checks disabled");
            None
        },
    };
    let updater = UpdateChecker::new(client, env!("CARGO_PKG_VERSION"));
    if updater.is_enabled() {
        // handle dropped: the task lives as long as the runtime
        let _periodic = updater.spawn_periodic(config.update_interval);
    }

    let state = Arc::new(AppState::new(storage, updater, config.cache_max_age));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
