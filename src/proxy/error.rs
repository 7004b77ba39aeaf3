use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures a proxy handler can hit while serving one request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Connect, DNS, timeout or body-read failure talking to the upstream.
    #[error("upstream request to {target} failed: {source}")]
    Transport {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unknown service identifier {0:?}")]
    InvalidServiceId(String),

    #[error("cannot build upstream url from {0}")]
    InvalidTarget(String),

    #[error("template {0:?} not found")]
    TemplateNotFound(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::InvalidServiceId(ref id) => {
                tracing::warn!(service = %id, "Rejected service identifier");
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"Error": "Unknown service identifier"})),
                )
                    .into_response()
            }
            transport @ ProxyError::Transport { .. } => {
                // Already logged at error by the upstream client.
                tracing::debug!(error = %transport, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn transport_error_is_empty_500() {
        // Port 1 on loopback refuses connections.
        let source = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .unwrap_err();
        let response = ProxyError::Transport {
            target: "http://127.0.0.1:1/".to_string(),
            source,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn invalid_service_id_is_json_404() {
        let response = ProxyError::InvalidServiceId("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({"Error": "Unknown service identifier"}));
    }
}
