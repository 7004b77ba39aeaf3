use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::http::request::request_id;
use crate::private::PrivateState;
use crate::proxy::ProxyError;

/// GET: fetch the fixed target and echo it as JSON.
pub async fn run_service(
    State(state): State<PrivateState>,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let payload = state
        .client
        .fetch(&state.target, request_id(&headers))
        .await?;

    if !payload.is_decoded() {
        tracing::warn!(
            request_id = request_id(&headers).unwrap_or("-"),
            target = %state.target,
            "Upstream body is not JSON, passing raw response through"
        );
    }

    Ok(payload.into_response())
}

pub async fn reject_method(State(state): State<PrivateState>) -> Response {
    state.methods.reject()
}
