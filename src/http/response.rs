//! Shared response shapes.
//!
//! # Responsibilities
//! - The `{"Error": "This is a GET API method"}` reply for routed non-GET methods
//!
//! # Design Decisions
//! - Status defaults to 200 for compatibility with existing callers;
//!   `methods.method_error_status = 405` opts into the correct status

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::MethodConfig;

pub const GET_ONLY_MESSAGE: &str = "This is a GET API method";

#[derive(Debug, Serialize)]
pub struct MethodError {
    #[serde(rename = "Error")]
    pub error: &'static str,
}

/// How a service answers routed methods it does not serve.
#[derive(Debug, Clone, Copy)]
pub struct MethodPolicy {
    status: StatusCode,
}

impl MethodPolicy {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }

    pub fn from_config(config: &MethodConfig) -> Self {
        Self::new(StatusCode::from_u16(config.method_error_status).unwrap_or(StatusCode::OK))
    }

    /// Build the GET-only error reply. No upstream call is made for it.
    pub fn reject(&self) -> Response {
        (
            self.status,
            Json(MethodError {
                error: GET_ONLY_MESSAGE,
            }),
        )
            .into_response()
    }
}

impl Default for MethodPolicy {
    fn default() -> Self {
        Self::new(StatusCode::OK)
    }
}
