//! Outbound HTTP client.
//!
//! # Responsibilities
//! - Issue exactly one GET per inbound request
//! - Hand the body to the JSON-or-raw decoder
//! - Record upstream latency and outcome
//!
//! # Design Decisions
//! - No retries, no circuit breaking
//! - No timeout unless configured
//! - Upstream status codes are passed through to the decoder, never branched on

use axum::http::header::CONTENT_TYPE;
use std::time::{Duration, Instant};
use url::Url;

use crate::config::UpstreamConfig;
use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;
use crate::proxy::{ProxyError, UpstreamPayload};

/// Shared client used by the proxy handlers. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    forward_request_id: bool,
}

impl UpstreamClient {
    /// Build a client from the upstream settings.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.proxy_from_env {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            forward_request_id: config.forward_request_id,
        })
    }

    /// GET `target` and decode the body.
    pub async fn fetch(
        &self,
        target: &Url,
        request_id: Option<&str>,
    ) -> Result<UpstreamPayload, ProxyError> {
        let start_time = Instant::now();
        let host = target.host_str().unwrap_or("unknown").to_string();

        let mut request = self.http.get(target.clone());
        if let (true, Some(id)) = (self.forward_request_id, request_id) {
            request = request.header(X_REQUEST_ID, id);
        }

        tracing::debug!(
            request_id = request_id.unwrap_or("-"),
            target = %target,
            "Forwarding GET upstream"
        );

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.transport_failure(target, &host, start_time, e)),
        };

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Err(self.transport_failure(target, &host, start_time, e)),
        };

        let payload = UpstreamPayload::decode(status, content_type, body);
        metrics::record_upstream(&host, payload.kind(), start_time);

        tracing::debug!(
            request_id = request_id.unwrap_or("-"),
            target = %target,
            status = %status,
            kind = payload.kind(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Upstream responded"
        );

        Ok(payload)
    }

    fn transport_failure(
        &self,
        target: &Url,
        host: &str,
        start_time: Instant,
        source: reqwest::Error,
    ) -> ProxyError {
        metrics::record_upstream(host, "transport_error", start_time);
        tracing::error!(
            target = %target,
            timeout = source.is_timeout(),
            connect = source.is_connect(),
            error = %source,
            "Upstream error"
        );
        ProxyError::Transport {
            target: target.to_string(),
            source,
        }
    }
}
