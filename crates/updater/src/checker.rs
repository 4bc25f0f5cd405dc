//! Cached update status with on-demand and periodic checks.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::client::{UpdateClient, UpdateInfo};

/// What the console knows about available updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateStatus {
    pub current_version: String,
    pub update_available: bool,
    /// True while at least one non-silent check is running.
    pub is_checking: bool,
    /// Time of the last successful check.
    pub last_checked: Option<DateTime<Utc>>,
    /// Manifest of the newer release, if any.
    pub latest: Option<UpdateInfo>,
    /// Non-silent checks in flight; `is_checking` mirrors `running > 0`.
    #[serde(skip)]
    running: u32,
}

/// Shortest period `spawn_periodic` accepts.
const MIN_CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// Shared handle; clones observe the same status.
#[derive(Debug, Clone)]
pub struct UpdateChecker {
    client: Option<UpdateClient>,
    status: Arc<RwLock<UpdateStatus>>,
}

impl UpdateChecker {
    /// `client` is `None` when no manifest URL is configured; checks then
    /// leave the status untouched.
    #[must_use]
    pub fn new(client: Option<UpdateClient>, current_version: &str) -> Self {
        let status =
            UpdateStatus { current_version: current_version.to_owned(), ..UpdateStatus::default() };
        Self { client, status: Arc::new(RwLock::new(status)) }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub async fn status(&self) -> UpdateStatus {
        self.status.read().await.clone()
    }

    /// Check the manifest now. Failures are logged and reported as
    /// "no update available"; this never returns an error.
    ///
    /// A silent check does not flip `is_checking` and logs failures at debug.
    pub async fn check_now(&self, silent: bool) -> UpdateStatus {
        let Some(client) = &self.client else {
            tracing::debug!("update check skipped: no manifest URL configured");
            return self.status().await;
        };
        let current_version = {
            let mut status = self.status.write().await;
            if !silent {
                status.running += 1;
                status.is_checking = true;
            }
            status.current_version.clone()
        };

        let result = client.check(&current_version).await;

        let mut status = self.status.write().await;
        if !silent {
            status.running = status.running.saturating_sub(1);
            status.is_checking = status.running > 0;
        }
        match result {
            Ok(latest) => {
                if let Some(info) = &latest {
                    tracing::info!(current = %current_version, latest = %info.version, "update available");
                }
                status.update_available = latest.is_some();
                status.latest = latest;
                status.last_checked = Some(Utc::now());
            },
            Err(e) => {
                if silent {
                    tracing::debug!(error = %e, transient = e.is_transient(), "update check failed");
                } else {
                    tracing::warn!(error = %e, transient = e.is_transient(), "update check failed");
                }
                status.update_available = false;
                status.latest = None;
            },
        }
        status.clone()
    }

    /// Spawns a task that checks silently right away and then every `interval`.
    ///
    /// Intervals below one second are raised to one second.
    pub fn spawn_periodic(&self, interval: Duration) -> JoinHandle<()> {
        let interval = if interval < MIN_CHECK_INTERVAL {
            tracing::warn!(?interval, "update check interval too short, using 1s");
            MIN_CHECK_INTERVAL
        } else {
            interval
        };
        let checker = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                checker.check_now(true).await;
            }
        })
    }
}
