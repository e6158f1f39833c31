//! icsnetd - ICS network telemetry analytics server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use icsnet_srv::ServerConfig;

/// ICS network telemetry analytics server.
///
/// Ingests scan findings and IDS alerts for a monitored segment and serves
/// a derived analytics report with an alert-volume chart.
#[derive(Parser, Debug)]
#[command(name = "icsnetd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults apply if absent)
    #[arg(short, long, env = "ICSNET_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen address from the config file
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(listen) = cli.listen {
        config.listen = listen;
    }

    icsnet_srv::start_server(config).await?;
    Ok(())
}
