use std::time::Instant;

use axum::{body::Bytes, http::{HeaderMap, Method, StatusCode, Uri}, response::{IntoResponse, Response}, Json};
use serde_json::json;
use tracing::log;

use crate::rest_client::{FootballDataClient, AUTH_HEADER};

pub const PROXY_PREFIX: &str = "/football-data";

const REQUEST_HEADERS: [&str; 2] = ["accept", "content-type"];
const RESPONSE_HEADERS: [&str; 3] = ["content-type", "cache-control", "expires"];

/// Upstream url for an inbound proxy path, keeping the raw query.
pub fn target_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    let suffix = path.strip_prefix(PROXY_PREFIX).unwrap_or(path);
    let suffix = if suffix.is_empty() || suffix.starts_with('/') {
        suffix.to_string()
    } else {
        format!("/{suffix}")
    };
    match query.filter(|e| !e.is_empty()) {
        Some(query) => format!("{}{suffix}?{query}", base_url.trim_end_matches('/')),
        None => format!("{}{suffix}", base_url.trim_end_matches('/')),
    }
}

pub fn filter_headers(headers: &HeaderMap, allowed: &[&str]) -> HeaderMap {
    let mut result = HeaderMap::new();
    for (name, value) in headers {
        if allowed.contains(&name.as_str()) {
            result.append(name.clone(), value.clone());
        }
    }
    result
}

/// Forwards one request with the server side token. Only allowlisted headers
/// cross in either direction.
pub async fn forward(client: &FootballDataClient, method: Method, uri: &Uri, headers: &HeaderMap, body: Bytes) -> Response {
    let Some(token) = client.token() else {
        log::warn!("[PROXY] Missing token");
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Missing Football Data API token" }))).into_response();
    };
    let url = target_url(client.base_url(), uri.path(), uri.query());
    let before = Instant::now();

    let mut req = client.http().request(method.clone(), &url)
        .headers(filter_headers(headers, &REQUEST_HEADERS))
        .header(AUTH_HEADER, token);
    if method != Method::GET && method != Method::HEAD {
        req = req.body(body);
    }

    let rsp = match req.send().await {
        Ok(rsp) => rsp,
        Err(e) => {
            log::error!("[PROXY] {method} {url} failed: {e}");
            return (StatusCode::BAD_GATEWAY, Json(json!({ "error": "Failed to reach Football Data API", "details": e.to_string() }))).into_response();
        }
    };
    let status = rsp.status();
    let rsp_headers = filter_headers(rsp.headers(), &RESPONSE_HEADERS);
    let bytes = match rsp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("[PROXY] {method} {url} body failed: {e}");
            return (StatusCode::BAD_GATEWAY, Json(json!({ "error": "Failed to reach Football Data API", "details": e.to_string() }))).into_response();
        }
    };
    log::info!("[PROXY] {method} {url} {} {:.2?}", status.as_u16(), before.elapsed());
    (status, rsp_headers, bytes).into_response()
}
