//! Metrics collection and exposition.
//!
//! # Metrics
//! - `runservice_requests_total` (counter): inbound requests by route, method, status
//! - `runservice_request_duration_seconds` (histogram): inbound latency
//! - `runservice_upstream_requests_total` (counter): upstream calls by host, outcome
//! - `runservice_upstream_duration_seconds` (histogram): upstream latency
//!
//! Outcomes are `json`, `raw` or `transport_error`.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Middleware recording every inbound request.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = request.method().to_string();

    let response = next.run(request).await;
    record_request(route, method, response.status().as_u16(), start_time);
    response
}

pub fn record_request(route: String, method: String, status: u16, start_time: Instant) {
    let duration = start_time.elapsed().as_secs_f64();
    metrics::counter!(
        "runservice_requests_total",
        "route" => route.clone(),
        "method" => method,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("runservice_request_duration_seconds", "route" => route).record(duration);
}

pub fn record_upstream(host: &str, outcome: &'static str, start_time: Instant) {
    let duration = start_time.elapsed().as_secs_f64();
    metrics::counter!(
        "runservice_upstream_requests_total",
        "host" => host.to_owned(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("runservice_upstream_duration_seconds", "host" => host.to_owned())
        .record(duration);
}
