//! fieldlog poller - continuous channel telemetry logging.
//!
//! Run with: `cargo run -p fieldlog-poller`

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use fieldlog_client::ChannelClient;
use fieldlog_poller::{Collector, Config};
use fieldlog_store::LogStore;

/// Continuous channel telemetry logger.
#[derive(Parser, Debug)]
#[command(name = "fieldlog-poller")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Channel feed endpoint URL (overrides config).
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Number of recent records to request per fetch (overrides config).
    #[arg(short, long)]
    results: Option<u32>,

    /// Directory for per-device log files (overrides config).
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Poll interval in seconds (overrides config).
    #[arg(short, long)]
    interval: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fieldlog_poller=info".parse()?)
                .add_directive("fieldlog_store=info".parse()?)
                .add_directive("fieldlog_client=info".parse()?),
        )
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default().unwrap_or_default(),
    };

    // Override config with CLI args
    if let Some(endpoint) = args.endpoint {
        config.source.endpoint = endpoint;
    }
    if let Some(results) = args.results {
        config.source.results = results;
    }
    if let Some(data_dir) = args.data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Some(interval) = args.interval {
        config.poll.interval_secs = interval;
    }

    config.validate()?;

    info!(
        "Polling {} (results={}) into {}",
        config.source.endpoint,
        config.source.results,
        config.storage.data_dir.display()
    );

    let client = ChannelClient::new(&config.source.endpoint, config.source.results)?;
    let store = LogStore::new(&config.storage.data_dir);
    let collector = Collector::new(
        client,
        store,
        Duration::from_secs(config.poll.interval_secs),
    );

    collector.run().await;

    Ok(())
}
