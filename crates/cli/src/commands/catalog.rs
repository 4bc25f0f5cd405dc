use std::sync::Arc;

use anyhow::Result;
use labdesk_core::{ConsoleConfig, ObjectiveWithPrices};
use labdesk_service::{CatalogService, WorkOrderService};

use crate::open_storage;

pub(crate) async fn run_objectives(config: &ConsoleConfig, memory: bool, json: bool) -> Result<()> {
    let storage = Arc::new(open_storage(memory, config).await?);
    let rows = CatalogService::new(storage).list_with_prices().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{:>5}  {:<32} {:<14} {:>5} {:>10} {:>10}", "id", "objetivo", "tipo", "días", "químico", "biológico");
        for row in &rows {
            println!("{}", format_row(row));
        }
    }
    Ok(())
}

pub(crate) async fn run_work_orders(config: &ConsoleConfig, memory: bool, limit: usize) -> Result<()> {
    let storage = Arc::new(open_storage(memory, config).await?);
    let rows = WorkOrderService::new(storage).list_master_view().await?;
    let shown: Vec<_> = rows.into_iter().take(limit).collect();
    println!("{}", serde_json::to_string_pretty(&shown)?);
    Ok(())
}

fn format_row(row: &ObjectiveWithPrices) -> String {
    let details = &row.objective.details;
    let price = |p: Option<f64>| p.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"));
    format!(
        "{:>5}  {:<32} {:<14} {:>5} {:>10} {:>10}",
        row.id(),
        details.name,
        details.test_type.map_or("-", |t| t.as_str()),
        details.turnaround_days.map_or_else(|| "-".to_owned(), |d| d.to_string()),
        price(row.prices.chemical),
        price(row.prices.biological),
    )
}
