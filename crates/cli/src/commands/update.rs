use anyhow::Result;
use labdesk_core::ConsoleConfig;
use labdesk_updater::UpdateClient;

pub(crate) async fn run_check(config: &ConsoleConfig) -> Result<()> {
    let Some(url) = config.update_url.as_deref() else {
        println!("Update checks are not configured (set LABDESK_UPDATE_URL)");
        return Ok(());
    };
    let current = env!("CARGO_PKG_VERSION");
    match UpdateClient::new(url)?.check(current).await? {
        Some(info) => {
            println!("Update available: {current} -> {}", info.version);
            if let Some(notes) = info.notes {
                println!("{notes}");
            }
        },
        None => println!("labdesk {current} is up to date"),
    }
    Ok(())
}
