//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, URLs and route paths
//! - Validate value ranges (timeouts > 0, known status codes)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure: config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::{
    EdgeConfig, ListenerConfig, MethodConfig, ObservabilityConfig, PrivateConfig, StaticConfig,
    UpstreamConfig,
};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("invalid {field} url {value:?}: {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("route path {0:?} must start with '/' and contain no '{{' or '}}'")]
    InvalidRoutePath(String),

    #[error("duplicate route path {0:?}")]
    DuplicateRoutePath(String),

    #[error("method_error_status must be 200 or 405, got {0}")]
    InvalidMethodErrorStatus(u16),

    #[error("allowed service {0:?} is not a numeric identifier")]
    InvalidAllowedService(String),

    #[error("service_prefix must not be empty")]
    EmptyServicePrefix,

    #[error("upstream timeout must be greater than zero")]
    ZeroTimeout,
}

/// Semantic validation for a loaded configuration.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

impl Validate for EdgeConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_listener(&self.listener, &mut errors);
        check_http_url("backend.base_url", &self.backend.base_url, &mut errors);
        if self.backend.service_prefix.is_empty() {
            errors.push(ValidationError::EmptyServicePrefix);
        }
        for id in &self.backend.allowed_services {
            if !is_numeric_id(id) {
                errors.push(ValidationError::InvalidAllowedService(id.clone()));
            }
        }
        check_upstream(&self.upstream, &mut errors);
        check_methods(&self.methods, &mut errors);
        check_observability(&self.observability, &mut errors);
        finish(errors)
    }
}

impl Validate for PrivateConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_listener(&self.listener, &mut errors);
        check_route_path(&self.route_path, &mut errors);
        check_http_url("target_url", &self.target_url, &mut errors);
        check_upstream(&self.upstream, &mut errors);
        check_methods(&self.methods, &mut errors);
        check_observability(&self.observability, &mut errors);
        finish(errors)
    }
}

impl Validate for StaticConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_listener(&self.listener, &mut errors);
        let mut seen = HashSet::new();
        for service in &self.services {
            check_route_path(&service.path, &mut errors);
            if !seen.insert(service.path.as_str()) {
                errors.push(ValidationError::DuplicateRoutePath(service.path.clone()));
            }
        }
        check_observability(&self.observability, &mut errors);
        finish(errors)
    }
}

/// Numeric service identifiers: a non-empty run of ASCII digits.
pub fn is_numeric_id(value: &str) -> bool {
    !value.is_empty() && value.len() <= 18 && value.bytes().all(|b| b.is_ascii_digit())
}

fn finish(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_listener(listener: &ListenerConfig, errors: &mut Vec<ValidationError>) {
    if listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: listener.bind_address.clone(),
        });
    }
}

fn check_http_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    let invalid = |reason: String| ValidationError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };
    match Url::parse(value) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        Ok(url) if url.cannot_be_a_base() => {
            errors.push(invalid("url cannot carry a path".to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(invalid(e.to_string())),
    }
}

fn check_route_path(path: &str, errors: &mut Vec<ValidationError>) {
    if !path.starts_with('/') || path.contains('{') || path.contains('}') {
        errors.push(ValidationError::InvalidRoutePath(path.to_string()));
    }
}

fn check_upstream(upstream: &UpstreamConfig, errors: &mut Vec<ValidationError>) {
    if upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }
}

fn check_methods(methods: &MethodConfig, errors: &mut Vec<ValidationError>) {
    if !matches!(methods.method_error_status, 200 | 405) {
        errors.push(ValidationError::InvalidMethodErrorStatus(
            methods.method_error_status,
        ));
    }
}

fn check_observability(observability: &ObservabilityConfig, errors: &mut Vec<ValidationError>) {
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: observability.metrics_address.clone(),
        });
    }
}
