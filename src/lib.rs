//! Tolerant pass-through proxy services.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser                 frontend (edge)                  app3 (private)            external
//!  ─────────▶ GET /{n} ───▶ validate n, GET ────────────────▶ GET /pri/runservice3 ───▶ JSON API
//!                           <base>/runservice{n}              decode JSON | raw
//!  ◀───────── index.html ◀─ decode JSON | raw, render ◀────── JSON response ◀─────────
//!
//!                           app2 (static): fixed {"message": ...} on one path
//! ```
//!
//! Every service is an [`HttpServer`] built from its validated config and run
//! by [`lifecycle::startup::serve`].

// Services
pub mod edge;
pub mod private;
pub mod proxy;
pub mod static_service;

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{EdgeConfig, PrivateConfig, StaticConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use proxy::{ProxyError, UpstreamPayload};
