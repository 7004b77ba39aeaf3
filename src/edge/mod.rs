//! Edge (frontend) service.
//!
//! # Data Flow
//! ```text
//! GET /            → render index.html with the no-data placeholder
//! GET /{service}   → service_id.rs (validate, build Url)
//!                  → proxy::UpstreamClient (one GET)
//!                  → render.rs (index.html, codes = payload)
//! HEAD, POST /, /{service} → {"Error": "This is a GET API method"}
//! ```

pub mod handlers;
pub mod render;
pub mod service_id;

use axum::{routing::get, Router};

use crate::config::EdgeConfig;
use crate::http::response::MethodPolicy;
use crate::http::server::ServerError;
use crate::proxy::UpstreamClient;

pub use service_id::{ServiceDirectory, ServiceId};

/// State injected into edge handlers.
#[derive(Debug, Clone)]
pub struct EdgeState {
    pub directory: ServiceDirectory,
    pub client: UpstreamClient,
    pub methods: MethodPolicy,
}

impl EdgeState {
    pub fn from_config(config: &EdgeConfig) -> Result<Self, ServerError> {
        Ok(Self {
            directory: ServiceDirectory::new(&config.backend)?,
            client: UpstreamClient::new(&config.upstream)?,
            methods: MethodPolicy::from_config(&config.methods),
        })
    }
}

/// Routes of the edge service.
pub fn router(state: EdgeState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::index)
                .head(handlers::reject_method)
                .post(handlers::reject_method),
        )
        .route(
            "/{service}",
            get(handlers::run_service)
                .head(handlers::reject_method)
                .post(handlers::reject_method),
        )
        .with_state(state)
}
