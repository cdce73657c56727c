//! Same-origin `/api` forwarder.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser console calls `/api/...` on the host it was served from. This
//! handler replays each call against `BACKEND_URL` so the console never
//! needs cross-origin access to the campus API.
//!
//! ERROR HANDLING
//! ==============
//! Upstream statuses are relayed untouched. Only an unreachable back end or
//! a broken upstream body becomes `502 Bad Gateway`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{ACCEPT, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied onto the upstream call.
fn forwarded_request_headers() -> [HeaderName; 2] {
    [CONTENT_TYPE, ACCEPT]
}

/// Response headers relayed back to the browser.
fn relayed_response_headers() -> [HeaderName; 2] {
    [CONTENT_TYPE, CONTENT_DISPOSITION]
}

/// Largest request body the forwarder buffers (bulk uploads, staff photos).
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Upstream URL for a forwarded `path` and optional raw query.
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", backend_url.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.backend_url, &path, query.as_deref());

    let mut request = state.http.request(method.clone(), &url);
    for name in forwarded_request_headers() {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend unreachable");
            return bad_gateway();
        }
    };

    let status = upstream.status();
    let mut relayed = HeaderMap::new();
    for name in relayed_response_headers() {
        if let Some(value) = upstream.headers().get(&name) {
            relayed.insert(name, value.clone());
        }
    }

    match upstream.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, status = status.as_u16(), "forwarded");
            (status, relayed, Body::from(bytes)).into_response()
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend body read failed");
            bad_gateway()
        }
    }
}

fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "campus API unreachable").into_response()
}
