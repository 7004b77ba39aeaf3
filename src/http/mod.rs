//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign / propagate x-request-id)
//!     → service routes (edge | private | static)
//!     → response.rs (GET-only error reply)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{MethodPolicy, GET_ONLY_MESSAGE};
pub use server::{HttpServer, ServerError};
