use anyhow::{Context, Result};
use labdesk_core::ConsoleConfig;
use labdesk_storage::{PgStorage, apply_dev_schema};

pub(crate) async fn run_init(config: &ConsoleConfig) -> Result<()> {
    let url = config.database_url.as_deref().context("DATABASE_URL must be set for init-schema")?;
    let storage = PgStorage::new(url).await?;
    apply_dev_schema(storage.pool()).await?;
    println!("Schema ready");
    Ok(())
}
