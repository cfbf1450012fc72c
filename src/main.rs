//! CourtVision Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Loaded from `config.toml` (see `courtvision init-config`) with
//! environment variable overrides:
//! - `COURTVISION_HOST`: Host to bind to (default: 0.0.0.0)
//! - `COURTVISION_PORT`: Port to listen on (default: 8082)
//! - `COURTVISION_FEED_TICK_MS`: Feed tick interval (default: 1000)
//! - `COURTVISION_FEED_SEED`: RNG seed for a reproducible feed
//! - `COURTVISION_FEED_ENABLED`: Enable the live feed (default: true)
//! - `RUST_LOG`: Log filter (overrides the config log level)

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courtvision::api::{serve, AppState};
use courtvision::config::{generate_default_config, Config, LoggingConfig};
use courtvision::game::{spawn_feed, GameFeed, GameStore};

#[derive(Parser)]
#[command(name = "courtvision", version, about = "Real-time basketball shot analytics server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the API server and simulated live feed
    Serve {
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the listen port
        #[arg(long)]
        port: Option<u16>,

        /// Override the feed RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a default config file to stdout
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve {
        config: None,
        port: None,
        seed: None,
    }) {
        Command::Serve { config, port, seed } => run_server(config, port, seed).await,
        Command::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
    }
}

async fn run_server(
    config_path: Option<PathBuf>,
    port: Option<u16>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(seed) = seed {
        config.feed.seed = Some(seed);
    }

    init_tracing(&config.logging);

    tracing::info!("Starting CourtVision server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        feed_enabled = config.feed.enabled,
        "Configuration loaded"
    );

    // Seed the opening snapshot and share it
    let mut feed = GameFeed::new(config.feed.seed);
    let store = Arc::new(GameStore::new(feed.initial_snapshot()));

    let state = AppState::new(Arc::clone(&store), config.server.clone());

    // Background feed: mutates the store and broadcasts partial updates
    let feed_task = if config.feed.enabled {
        Some(spawn_feed(
            store,
            Arc::clone(&state.ws_hub),
            config.feed.clone(),
        ))
    } else {
        tracing::info!("Live feed disabled, serving a static snapshot");
        None
    };

    serve(state, &config.server).await?;

    if let Some(task) = feed_task {
        task.abort();
    }
    tracing::info!("CourtVision server stopped");

    Ok(())
}

/// Initialize tracing per the logging config (RUST_LOG wins when set).
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "courtvision={},tower_http=debug",
            logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
