use clap::Parser;
use std::path::PathBuf;

use runservice::config::{load_or_default, port_from_env, ConfigError, PrivateConfig, Validate};
use runservice::lifecycle::startup;
use runservice::observability::logging;
use runservice::HttpServer;

#[derive(Parser)]
#[command(name = "app3")]
#[command(about = "Proxies a fixed external JSON endpoint", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address. PORT still replaces the port.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config: PrivateConfig = load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(port) = port_from_env()? {
        config.listener.override_port(port);
    }
    config.validate().map_err(ConfigError::Validation)?;

    logging::init(&config.observability);
    tracing::info!(
        bind_address = %config.listener.bind_address,
        route = %config.route_path,
        target = %config.target_url,
        "app3 v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let server = HttpServer::private(&config)?;
    startup::serve(server, &config.listener, &config.observability).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
