//! Private backend service (`app3`).
//!
//! # Data Flow
//! ```text
//! GET  /pri/runservice3 → proxy::UpstreamClient (fixed target)
//!                       → decoded JSON, or {status, content_type, body}
//! HEAD, POST /pri/runservice3 → {"Error": "This is a GET API method"}
//! ```

pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;
use url::Url;

use crate::config::PrivateConfig;
use crate::http::response::MethodPolicy;
use crate::http::server::ServerError;
use crate::proxy::UpstreamClient;

/// State injected into private handlers.
#[derive(Debug, Clone)]
pub struct PrivateState {
    pub target: Arc<Url>,
    pub client: UpstreamClient,
    pub methods: MethodPolicy,
}

impl PrivateState {
    pub fn from_config(config: &PrivateConfig) -> Result<Self, ServerError> {
        Ok(Self {
            target: Arc::new(Url::parse(&config.target_url)?),
            client: UpstreamClient::new(&config.upstream)?,
            methods: MethodPolicy::from_config(&config.methods),
        })
    }
}

/// Routes of the private service, mounted at `route_path`.
pub fn router(route_path: &str, state: PrivateState) -> Router {
    Router::new()
        .route(
            route_path,
            get(handlers::run_service)
                .head(handlers::reject_method)
                .post(handlers::reject_method),
        )
        .with_state(state)
}
