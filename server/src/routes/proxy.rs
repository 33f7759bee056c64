//! Pass-through of `/api/surveys/*` to the survey backend.
//!
//! Method, query string, body, and the content negotiation headers go
//! upstream unchanged; status, body, and content type come back unchanged.
//! The path tail is taken from the raw request URI, still percent-encoded, so
//! an encoded `?` or `/` stays inside its segment. Dot segments are refused
//! because the upstream URL parser would resolve them outside the survey API.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use surveys::config::SURVEYS_API_PATH;

use crate::state::AppState;

/// Request headers copied onto the upstream request.
const FORWARDED_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("survey backend unreachable: {0}")]
    Upstream(String),

    #[error("invalid survey API path: {0}")]
    InvalidPath(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

/// `.` or `..`, literal or percent-encoded (`%2e`, either case).
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Raw (still encoded) path below `/api/surveys/`.
///
/// # Errors
///
/// [`ProxyError::InvalidPath`] when the path is outside the survey API, is
/// empty, or contains a dot segment.
pub fn upstream_path(raw_path: &str) -> Result<&str, ProxyError> {
    let rest = raw_path
        .strip_prefix(SURVEYS_API_PATH)
        .and_then(|tail| tail.strip_prefix('/'))
        .filter(|tail| !tail.is_empty())
        .ok_or_else(|| ProxyError::InvalidPath(raw_path.to_owned()))?;
    if rest.split('/').any(is_dot_segment) {
        return Err(ProxyError::InvalidPath(raw_path.to_owned()));
    }
    Ok(rest)
}

/// `{api_base}/{rest}` plus the incoming query string, if any.
pub fn upstream_url(api_base: &str, rest: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{api_base}/{rest}?{query}"),
        None => format!("{api_base}/{rest}"),
    }
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let rest = upstream_path(uri.path()).inspect_err(|e| tracing::warn!(error = %e, "rejected proxy path"))?;
    let url = upstream_url(&state.api_base, rest, uri.query());

    let mut request = state.http.request(method.clone(), &url).body(body);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "survey backend request failed");
        ProxyError::Upstream(e.to_string())
    })?;

    let status = upstream.status();
    let content_type: Option<HeaderValue> = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied survey request");

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(header::CONTENT_TYPE);
        }
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
