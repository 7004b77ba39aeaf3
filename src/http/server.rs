//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the Axum Router for one of the three services
//! - Wire up middleware (request ID, tracing, metrics)
//! - Serve on a listener until shutdown is signalled

use axum::{
    body::Body,
    http::Request,
    middleware,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::{EdgeConfig, PrivateConfig, StaticConfig};
use crate::edge::{self, EdgeState};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, X_REQUEST_ID};
use crate::observability::metrics;
use crate::private::{self, PrivateState};
use crate::static_service;

/// Errors raised while building or running a server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid upstream url: {0}")]
    Url(#[from] url::ParseError),

    #[error("cannot build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Composition root: one per process, built at startup.
pub struct HttpServer {
    name: &'static str,
    router: Router,
}

impl HttpServer {
    /// The frontend: landing page plus `/{service}` proxying.
    pub fn edge(config: &EdgeConfig) -> Result<Self, ServerError> {
        let state = EdgeState::from_config(config)?;
        Ok(Self::new("frontend", edge::router(state)))
    }

    /// The private backend proxying one fixed URL.
    pub fn private(config: &PrivateConfig) -> Result<Self, ServerError> {
        let state = PrivateState::from_config(config)?;
        Ok(Self::new("app3", private::router(&config.route_path, state)))
    }

    /// Fixed-message service.
    pub fn static_service(config: &StaticConfig) -> Self {
        Self::new("app2", static_service::router(config))
    }

    fn new(name: &'static str, routes: Router) -> Self {
        Self {
            name,
            router: Self::with_layers(routes),
        }
    }

    /// Wrap routes with the shared middleware stack. Last layer runs first.
    fn with_layers(routes: Router) -> Router {
        routes
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id,
                )
            }))
            .layer(set_request_id_layer())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            service = self.name,
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!(service = self.name, "HTTP server stopped");
        Ok(())
    }
}
