//! Configuration schema definitions.
//!
//! This module defines the configuration structure for each of the three
//! services. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default base URL the edge service resolves service identifiers against.
pub const DEFAULT_BACKEND_BASE: &str = "http://private.jeremyto.demo.altostrat.com/pri";

/// Default external endpoint proxied by the private service.
pub const DEFAULT_PRIVATE_TARGET: &str = "https://jsonplaceholder.typicode.com/users";

/// Root configuration for the edge (frontend) service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Where numbered services live.
    pub backend: BackendTargetConfig,

    /// Outbound client settings.
    pub upstream: UpstreamConfig,

    /// Handling of non-GET methods.
    pub methods: MethodConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::on_port(5000),
            backend: BackendTargetConfig::default(),
            upstream: UpstreamConfig::default(),
            methods: MethodConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Root configuration for the private backend service (`app3`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PrivateConfig {
    pub listener: ListenerConfig,

    /// Path the proxy route is mounted on.
    pub route_path: String,

    /// Fixed external URL fetched on every GET.
    pub target_url: String,

    pub upstream: UpstreamConfig,

    pub methods: MethodConfig,

    pub observability: ObservabilityConfig,
}

impl Default for PrivateConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            route_path: "/pri/runservice3".to_string(),
            target_url: DEFAULT_PRIVATE_TARGET.to_string(),
            upstream: UpstreamConfig::default(),
            methods: MethodConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Root configuration for a static message service (`app2`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticConfig {
    pub listener: ListenerConfig,

    /// Exact paths answered with a fixed message.
    pub services: Vec<StaticServiceConfig>,

    pub observability: ObservabilityConfig,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            services: vec![StaticServiceConfig {
                path: "/pri/runservice2".to_string(),
                message: "App2 served by nodejs app".to_string(),
            }],
            observability: ObservabilityConfig::default(),
        }
    }
}

/// A single fixed-message route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticServiceConfig {
    /// Exact request path (e.g., "/pri/runservice2").
    pub path: String,

    /// Value of the `message` field in the JSON reply.
    pub message: String,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl ListenerConfig {
    /// Listen on all interfaces at the given port.
    pub fn on_port(port: u16) -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", port),
        }
    }

    /// Replace the port of the bind address, keeping the host when it parses.
    pub fn override_port(&mut self, port: u16) {
        self.bind_address = match self.bind_address.parse::<SocketAddr>() {
            Ok(mut addr) => {
                addr.set_port(port);
                addr.to_string()
            }
            Err(_) => format!("0.0.0.0:{}", port),
        };
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self::on_port(8080)
    }
}

/// Location of the numbered backend services.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendTargetConfig {
    /// Base URL; the service segment is appended to its path.
    pub base_url: String,

    /// Prefix of the final path segment (`runservice` + identifier).
    pub service_prefix: String,

    /// Accepted identifiers. Empty means any numeric identifier.
    pub allowed_services: Vec<String>,
}

impl Default for BackendTargetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_BASE.to_string(),
            service_prefix: "runservice".to_string(),
            allowed_services: Vec::new(),
        }
    }
}

/// Outbound HTTP client settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Total request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,

    /// User-Agent sent upstream.
    pub user_agent: String,

    /// Honour HTTP(S)_PROXY environment variables.
    pub proxy_from_env: bool,

    /// Forward the inbound `x-request-id` header upstream.
    pub forward_request_id: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: concat!("runservice/", env!("CARGO_PKG_VERSION")).to_string(),
            proxy_from_env: true,
            forward_request_id: true,
        }
    }
}

/// How routed-but-unserviced methods (POST) are answered.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MethodConfig {
    /// Status sent with the `{"Error": ...}` body. 200 or 405.
    pub method_error_status: u16,
}

impl Default for MethodConfig {
    fn default() -> Self {
        Self {
            method_error_status: 200,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Emit JSON log lines instead of the human format.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info,tower_http=info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
