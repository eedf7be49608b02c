use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;

use fridgeplan::routes::{AppState, DataFiles, router};
use fridgeplan_recipe::RecipeCatalog;

/// fridgeplan - kitchen inventory, meal planning, and grocery lists
#[derive(Parser)]
#[command(name = "fridgeplan")]
#[command(about = "Track the fridge, plan the week, shop the shortfalls", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Delete all persisted state (fridge, grocery list, calendar, settings)
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = fridgeplan::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    fridgeplan::observability::init_observability("fridgeplan", &config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Reset => reset_command(config),
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: fridgeplan::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting fridgeplan server...");

    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    let catalog = RecipeCatalog::embedded()?;
    tracing::info!(recipes = catalog.len(), "Recipe catalog loaded");

    let state = AppState::load(Path::new(&config.storage.data_dir), catalog)?;
    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
fn reset_command(config: fridgeplan::config::Config) -> Result<()> {
    let files = DataFiles::new(&config.storage.data_dir);

    for path in files.all() {
        match std::fs::remove_file(&path) {
            Ok(()) => tracing::info!(path = %path.display(), "Removed"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
    }

    tracing::info!("All persisted state removed");
    Ok(())
}
