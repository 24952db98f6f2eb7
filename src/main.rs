//! Twitter Fetcher CLI - main entry point
//!
//! This is the unified CLI interface for all fetcher operations.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use tracing::warn;
use twitter_fetcher::{commands, metrics, Error, Settings};

#[derive(Parser)]
#[command(name = "twitter_fetcher")]
#[command(about = "Twitter/X account media archiver driving gallery-dl", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to expose Prometheus metrics (e.g., 0.0.0.0:9898)
    #[arg(long, env = "METRICS_ADDR")]
    metrics_addr: Option<String>,

    /// Settings file (defaults to config.yml in the working directory)
    #[arg(long, env = "TWITTER_FETCHER_CONFIG_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download all media from an account (full interactive pipeline)
    Fetch {
        /// Account reference: handle, @handle, or profile URL (prompted when omitted)
        account: Option<String>,

        /// Skip confirmations and run non-interactively
        #[arg(short, long, default_value_t = false)]
        yes: bool,

        /// Set up Twitter authentication before downloading
        #[arg(long, default_value_t = false)]
        auth: bool,
    },

    /// Store Twitter credentials in the netrc file
    Auth,

    /// Generate the gallery-dl configuration for an account
    WriteConfig {
        /// Account reference: handle, @handle, or profile URL
        account: String,
    },

    /// Generate the metadata sidecar for an account
    Metadata {
        /// Account reference: handle, @handle, or profile URL
        account: String,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Fetch { .. } => "fetch",
            Commands::Auth => "auth",
            Commands::WriteConfig { .. } => "write_config",
            Commands::Metadata { .. } => "metadata",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("twitter_fetcher=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    if let Some(addr) = cli.metrics_addr.as_deref() {
        match addr.parse::<SocketAddr>() {
            Ok(socket) => metrics::spawn_metrics_server(socket),
            Err(err) => warn!(%addr, "Invalid metrics address: {}", err),
        }
    }

    // An explicitly named settings file must load; the implicit one may be absent.
    let settings = match cli.config {
        Some(path) => Settings::load_from_file(&path).map_err(Error::ConfigError)?,
        None => Settings::new(),
    };

    let command_name = cli.command.name();
    metrics::record_command_start(command_name);
    let start = Instant::now();

    let result = execute_command(&settings, cli.command).await;

    metrics::record_command_result(command_name, start.elapsed(), result.is_ok());

    result
}

async fn execute_command(settings: &Settings, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Fetch { account, yes, auth } => {
            commands::fetch::run(
                settings,
                commands::FetchOptions {
                    account,
                    assume_yes: yes,
                    setup_auth: auth,
                },
            )
            .await?;
        }
        Commands::Auth => {
            commands::auth::run(settings)?;
        }
        Commands::WriteConfig { account } => {
            commands::write_config::run(settings, &account)?;
        }
        Commands::Metadata { account } => {
            commands::metadata::run(settings, &account)?;
        }
    }

    Ok(())
}
