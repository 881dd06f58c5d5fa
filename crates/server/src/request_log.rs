//! Per-request access log: method, path, timestamp, and the body of POST
//! and PUT requests.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

use crate::errors::JsonApiError;

/// Same ceiling axum applies to `Json` bodies by default.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

fn logs_body(method: &Method) -> bool {
    method == Method::POST || method == Method::PUT
}

pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    if !logs_body(&method) {
        info!(%method, %path, %time, "incoming_request");
        return next.run(req).await;
    }

    // 先读出请求体用于日志，再原样交还给后续处理器
    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(%method, %path, %time, error = %e, "request_body_unreadable");
            return JsonApiError::unreadable_body(e.to_string()).into_response();
        }
    };
    info!(
        %method,
        %path,
        %time,
        body = %String::from_utf8_lossy(&bytes),
        "incoming_request"
    );
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
