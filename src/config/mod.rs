//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, or defaults)
//!     → PORT / --bind overrides
//!     → validation.rs (semantic checks)
//!     → EdgeConfig | PrivateConfig | StaticConfig (validated, immutable)
//!     → moved into the service's HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow running with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, port_from_env, ConfigError};
pub use schema::{
    BackendTargetConfig, EdgeConfig, ListenerConfig, MethodConfig, ObservabilityConfig,
    PrivateConfig, StaticConfig, StaticServiceConfig, UpstreamConfig,
};
pub use validation::{Validate, ValidationError};
