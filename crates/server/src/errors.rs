use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::{Rule, Violation};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

pub const NOT_FOUND_MESSAGE: &str = "Menu item not found";

/// Error reply with a JSON body: `{"errors": [...]}` for 400 and
/// `{"message": ...}` for 404.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    body: serde_json::Value,
}

impl JsonApiError {
    pub fn new(status: StatusCode, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, serde_json::json!({ "message": NOT_FOUND_MESSAGE }))
    }

    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, serde_json::json!({ "errors": violations }))
    }

    pub fn malformed_body(rejection: JsonRejection) -> Self {
        Self::unreadable_body(rejection.body_text())
    }

    pub fn unreadable_body(msg: impl Into<String>) -> Self {
        Self::validation(vec![Violation::new("body", Rule::MalformedJson, msg)])
    }

    pub fn status(&self) -> StatusCode { self.status }

    pub fn body(&self) -> &serde_json::Value { &self.body }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(violations) => Self::validation(violations),
            ServiceError::NotFound(_) => Self::not_found(),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, "request_rejected");
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_and_body() {
        let nf: JsonApiError = ServiceError::NotFound(9).into();
        assert_eq!(nf.status(), StatusCode::NOT_FOUND);
        assert_eq!(nf.body()["message"], NOT_FOUND_MESSAGE);

        let v = Violation::new("name", Rule::TooShort, "name must be at least 3 characters long");
        let bad: JsonApiError = ServiceError::Validation(vec![v]).into();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bad.body()["errors"][0]["field"], "name");
        assert_eq!(bad.body()["errors"][0]["rule"], "too_short");
    }
}
