//! Decoded-or-raw upstream payload.
//!
//! Every upstream body is first offered to the JSON decoder. When that fails
//! the response is kept as-is and both consumers (the HTML renderer and the
//! JSON serializer) handle that arm explicitly.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Result of one upstream GET.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamPayload {
    /// Body parsed as JSON.
    Decoded(Value),
    /// Body that did not parse, kept with its status and content type.
    Raw(RawResponse),
}

/// An upstream response whose body is not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamPayload {
    /// Decode `body` as JSON, falling back to the raw response.
    ///
    /// The upstream status is not consulted: a 500 carrying a JSON body is
    /// still `Decoded`.
    pub fn decode(status: StatusCode, content_type: Option<String>, body: Bytes) -> Self {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => UpstreamPayload::Decoded(value),
            Err(_) => UpstreamPayload::Raw(RawResponse {
                status,
                content_type,
                body,
            }),
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self, UpstreamPayload::Decoded(_))
    }

    /// Label used in logs, metrics and the rendered page.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamPayload::Decoded(_) => "json",
            UpstreamPayload::Raw(_) => "raw",
        }
    }

    /// JSON form sent back by the private service.
    pub fn to_json(&self) -> Value {
        match self {
            UpstreamPayload::Decoded(value) => value.clone(),
            UpstreamPayload::Raw(raw) => raw.to_json(),
        }
    }

    /// Text embedded into the rendered page (unescaped).
    pub fn to_display_text(&self) -> String {
        match self {
            UpstreamPayload::Decoded(value) => value.to_string(),
            UpstreamPayload::Raw(raw) => raw.body_text(),
        }
    }
}

impl RawResponse {
    /// Body as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "status": self.status.as_u16(),
            "content_type": self.content_type,
            "body": self.body_text(),
        })
    }
}

impl IntoResponse for UpstreamPayload {
    fn into_response(self) -> Response {
        match self {
            UpstreamPayload::Decoded(value) => Json(value).into_response(),
            UpstreamPayload::Raw(raw) => Json(raw.to_json()).into_response(),
        }
    }
}
