//! Tolerant pass-through proxy.
//!
//! # Data Flow
//! ```text
//! inbound GET
//!     → handler resolves target Url (edge: service id, private: fixed)
//!     → upstream.rs (one GET, no retry)
//!     → payload.rs (JSON decode, else keep raw response)
//!     → edge: HTML render | private: JSON response
//!
//! transport failure → error.rs → opaque 500
//! ```

pub mod error;
pub mod payload;
pub mod upstream;

pub use error::ProxyError;
pub use payload::{RawResponse, UpstreamPayload};
pub use upstream::UpstreamClient;
