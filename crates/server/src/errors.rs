use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::ServiceError;
use tracing::error;

/// Error envelope returned by every procedure: `{"error": {"code", "message"}}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl JsonApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self { status, code, message: message.into() }
    }

    /// Undecodable request body.
    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let status = match &e {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::ReferentialIntegrity(_) => StatusCode::CONFLICT,
            ServiceError::Store(_) => {
                error!(err = %e, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, e.code(), e.to_string())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let error = ErrorBody { code: self.code, message: &self.message };
        (self.status, Json(serde_json::json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("title_en must not be empty".into()), StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            (ServiceError::not_found("service", 1), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (ServiceError::missing_parent("project", 2), StatusCode::CONFLICT, "REFERENTIAL_INTEGRITY"),
            (ServiceError::Store("pool timed out".into()), StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
        ];
        for (err, status, code) in cases {
            let api: JsonApiError = err.into();
            assert_eq!(api.status, status);
            assert_eq!(api.code, code);
        }
    }

    #[test]
    fn response_carries_status() {
        let res = JsonApiError::bad_input("expected value at line 1").into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
