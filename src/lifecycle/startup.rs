//! Startup orchestration shared by the service binaries.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Bind the listener
//! - Run the server until SIGINT/SIGTERM
//!
//! # Design Decisions
//! - Fail fast: bind errors are fatal
//! - Configuration is loaded and validated by the caller

use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::config::{ListenerConfig, ObservabilityConfig};
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

pub async fn serve(
    server: HttpServer,
    listener: &ListenerConfig,
    observability: &ObservabilityConfig,
) -> Result<(), ServerError> {
    if observability.metrics_enabled {
        match observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let tcp = TcpListener::bind(listener.bind_address.as_str()).await?;
    tracing::info!(
        service = server.name(),
        address = %tcp.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();
    server.run(tcp, shutdown.subscribe()).await
}
