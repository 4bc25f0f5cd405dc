mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use labdesk_core::ConsoleConfig;
use labdesk_storage::{MemoryStorage, StorageBackend};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "labdesk")]
#[command(version)]
#[command(about = "Admin console for laboratory test objectives, prices and work orders", long_about = None)]
struct Cli {
    /// Use the built-in demo data instead of DATABASE_URL
    #[arg(long, global = true)]
    memory: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the JSON API for the pricing and work-order grids
    Serve {
        #[arg(short, long, default_value = "37780")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print objectives with their chemical and biological prices
    Objectives {
        #[arg(long)]
        json: bool,
    },
    /// Print master-view rows, newest test first
    WorkOrders {
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Check the release manifest for a newer version
    CheckUpdate,
    /// Create the tables and master view in an empty database
    InitSchema,
}

pub(crate) async fn open_storage(memory: bool, config: &ConsoleConfig) -> Result<StorageBackend> {
    if memory {
        tracing::info!("using in-memory demo storage");
        return Ok(StorageBackend::new_memory(MemoryStorage::demo()));
    }
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set (or pass --memory for demo data)")?;
    Ok(StorageBackend::new_postgres(url).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ConsoleConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&config, cli.memory, &host, port).await,
        Commands::Objectives { json } => commands::catalog::run_objectives(&config, cli.memory, json).await,
        Commands::WorkOrders { limit } => commands::catalog::run_work_orders(&config, cli.memory, limit).await,
        Commands::CheckUpdate => commands::update::run_check(&config).await,
        Commands::InitSchema => commands::schema::run_init(&config).await,
    }
}
