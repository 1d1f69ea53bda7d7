//! arXiv Paper Viewer - Entry Point
//!
//! Serves the paper API and the static frontend over HTTP.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_viewer::{ArxivClient, PaperServer, config::Config};

#[derive(Parser, Debug)]
#[command(name = "arxiv-viewer")]
#[command(about = "API for browsing and searching arXiv papers")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: IpAddr,

    /// HTTP server port
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Upstream arXiv query endpoint
    #[arg(long, env = "ARXIV_API_URL")]
    api_url: Option<String>,

    /// Directory with index.html and frontend assets
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Retries on transient upstream failures (0 disables retrying)
    #[arg(long, env = "ARXIV_MAX_RETRIES")]
    max_retries: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }
    if let Some(max_retries) = cli.max_retries {
        config.max_retries = max_retries;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        static_dir = %config.static_dir.display(),
        max_retries = config.max_retries,
        "Starting arXiv paper viewer"
    );

    let client = ArxivClient::new(&config)?;
    let server = PaperServer::new(client, config.static_dir);

    server.run_http(SocketAddr::new(cli.host, cli.port)).await?;

    Ok(())
}
