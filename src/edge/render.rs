//! Page rendering.
//!
//! Templates are compiled into the binary and looked up by name. The only
//! syntax understood is `{{ key }}`; values are HTML-escaped and unknown keys
//! render as empty text.

use axum::response::Html;

use crate::proxy::{ProxyError, UpstreamPayload};

pub const INDEX_TEMPLATE: &str = "index.html";

/// Landing page data. Passed as text, never parsed.
pub const NO_DATA_PLACEHOLDER: &str = "{'data': 'no-data'}";

const TEMPLATES: &[(&str, &str)] = &[(INDEX_TEMPLATE, include_str!("../../templates/index.html"))];

/// The `codes` value handed to a template.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewData {
    Placeholder(String),
    Upstream(UpstreamPayload),
}

impl ViewData {
    fn kind(&self) -> &'static str {
        match self {
            ViewData::Placeholder(_) => "placeholder",
            ViewData::Upstream(payload) => payload.kind(),
        }
    }

    fn text(&self) -> String {
        match self {
            ViewData::Placeholder(text) => text.clone(),
            ViewData::Upstream(payload) => payload.to_display_text(),
        }
    }
}

/// Render template `name` with `codes` bound to `data`.
pub fn render_template(name: &str, data: &ViewData) -> Result<Html<String>, ProxyError> {
    let template = TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, body)| *body)
        .ok_or_else(|| ProxyError::TemplateNotFound(name.to_string()))?;

    let codes = data.text();
    let page = substitute(template, |key| match key {
        "codes" => Some(escape_html(&codes)),
        "kind" => Some(data.kind().to_string()),
        _ => None,
    });
    Ok(Html(page))
}

fn substitute(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                if let Some(value) = lookup(after[..end].trim()) {
                    out.push_str(&value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Bytes, http::StatusCode};
    use serde_json::json;

    #[test]
    fn placeholder_is_rendered_as_text() {
        let Html(page) =
            render_template(INDEX_TEMPLATE, &ViewData::Placeholder(NO_DATA_PLACEHOLDER.into()))
                .unwrap();
        assert!(page.contains("data-kind=\"placeholder\""));
        assert!(page.contains("{&#39;data&#39;: &#39;no-data&#39;}"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn decoded_payload_is_escaped_json() {
        let data = ViewData::Upstream(UpstreamPayload::Decoded(json!({"status": "ok"})));
        let Html(page) = render_template(INDEX_TEMPLATE, &data).unwrap();
        assert!(page.contains("data-kind=\"json\""));
        assert!(page.contains("{&quot;status&quot;:&quot;ok&quot;}"));
    }

    #[test]
    fn raw_payload_cannot_inject_markup() {
        let data = ViewData::Upstream(UpstreamPayload::decode(
            StatusCode::OK,
            Some("text/html".into()),
            Bytes::from_static(b"<script>alert(1)</script> {{ kind }}"),
        ));
        let Html(page) = render_template(INDEX_TEMPLATE, &data).unwrap();
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt; {{ kind }}"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn unknown_template() {
        let err = render_template("missing.html", &ViewData::Placeholder(String::new())).unwrap_err();
        assert!(matches!(err, ProxyError::TemplateNotFound(name) if name == "missing.html"));
    }

    #[test]
    fn substitute_handles_unknown_and_unterminated_keys() {
        let out = substitute("a {{ x }} b {{ y }} c {{ open", |key| {
            (key == "x").then(|| "X".to_string())
        });
        assert_eq!(out, "a X b  c {{ open");
    }
}
