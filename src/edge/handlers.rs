use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, Response},
};

use crate::edge::render::{render_template, ViewData, INDEX_TEMPLATE, NO_DATA_PLACEHOLDER};
use crate::edge::EdgeState;
use crate::http::request::request_id;
use crate::proxy::ProxyError;

/// GET `/`: landing page, no upstream call.
pub async fn index() -> Result<Html<String>, ProxyError> {
    render_template(
        INDEX_TEMPLATE,
        &ViewData::Placeholder(NO_DATA_PLACEHOLDER.to_string()),
    )
}

/// GET `/{service}`: fetch `<base>/runservice<service>` and render it.
pub async fn run_service(
    State(state): State<EdgeState>,
    Path(service): Path<String>,
    headers: HeaderMap,
) -> Result<Html<String>, ProxyError> {
    let target = state.directory.resolve(&service)?;

    tracing::info!(
        request_id = request_id(&headers).unwrap_or("-"),
        service = %service,
        target = %target,
        "Running service"
    );

    let payload = state.client.fetch(&target, request_id(&headers)).await?;
    render_template(INDEX_TEMPLATE, &ViewData::Upstream(payload))
}

/// HEAD or POST on any edge route.
pub async fn reject_method(State(state): State<EdgeState>) -> Response {
    state.methods.reject()
}
