use clap::Parser;
use std::path::PathBuf;

use runservice::config::{load_or_default, ConfigError, EdgeConfig, Validate};
use runservice::lifecycle::startup;
use runservice::observability::logging;
use runservice::HttpServer;

#[derive(Parser)]
#[command(name = "frontend")]
#[command(about = "Renders the JSON returned by a numbered backend service", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address (e.g. 0.0.0.0:5000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config: EdgeConfig = load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    config.validate().map_err(ConfigError::Validation)?;

    logging::init(&config.observability);
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend_base = %config.backend.base_url,
        "frontend v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let server = HttpServer::edge(&config)?;
    startup::serve(server, &config.listener, &config.observability).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
