//! Fixed-message services (`app2`).
//!
//! Each configured path answers any method with
//! `{"message": <configured message>}`. Other paths are 404.

use axum::{routing::any, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::config::StaticConfig;

pub fn router(config: &StaticConfig) -> Router {
    config
        .services
        .iter()
        .fold(Router::new(), |router, service| {
            let body: Arc<Value> = Arc::new(json!({ "message": service.message }));
            router.route(
                &service.path,
                any(move || {
                    let body = Arc::clone(&body);
                    async move { Json((*body).clone()) }
                }),
            )
        })
}
