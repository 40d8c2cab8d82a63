//! tasko CLI - To-do list management against a remote store.

mod commands;
mod interactive;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tasko_core::Session;
use tasko_http::{HttpStore, StoreConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tasko")]
#[command(author, version, about = "To-do list CLI backed by a remote store")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    format: output::OutputFormat,

    /// Base URL of the to-do API
    #[arg(
        long,
        global = true,
        env = "TASKO_API_URL",
        default_value = tasko_http::config::DEFAULT_API_URL
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items
    #[command(alias = "ls")]
    List,

    /// Add a new item
    Add {
        /// Title of the item
        title: String,
    },

    /// Flip an item's completion flag
    Toggle {
        /// Item id
        id: String,
    },

    /// Change an item's title
    Edit {
        /// Item id
        id: String,

        /// New title
        title: String,
    },

    /// Delete an item
    #[command(alias = "delete")]
    Rm {
        /// Item id
        id: String,
    },

    /// Interactive mode
    Ui,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = StoreConfig::new(&cli.api_url).context("Invalid API base URL")?;
    tracing::debug!(api_url = %cli.api_url, "resolved store config");
    let store = HttpStore::new(&config).context("Failed to build HTTP client")?;
    let mut session = Session::new(store);

    match cli.command {
        Commands::List => commands::list(&mut session, cli.format).await,
        Commands::Add { title } => commands::add(&mut session, &title, cli.format).await,
        Commands::Toggle { id } => commands::toggle(&mut session, &id, cli.format).await,
        Commands::Edit { id, title } => {
            commands::edit(&mut session, &id, &title, cli.format).await
        }
        Commands::Rm { id } => commands::remove(&mut session, &id, cli.format).await,
        Commands::Ui => interactive::run(&mut session).await,
    }
}
