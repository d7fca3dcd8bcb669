//! JSON error bodies shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Pairs the body with the status for its code.
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::UnsupportedLanguage => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::DatabaseError | ErrorCode::CacheError => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the full error response for `code`.
pub fn error_response(code: ErrorCode, message: impl Into<String>) -> Response {
    ErrorResponse::new(code, message).into_response_with_status(status_for(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_the_wire_name_of_the_code() {
        let error = ErrorResponse::new(ErrorCode::ValidationFailed, "Invalid input");
        assert_eq!(error.code, "VALIDATION_FAILED");
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn infrastructure_codes_are_unavailable() {
        assert_eq!(status_for(ErrorCode::DatabaseError), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_for(ErrorCode::CacheError), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_for(ErrorCode::UnsupportedLanguage), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn status_follows_the_code() {
        let response = error_response(ErrorCode::SessionNotFound, "gone");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn serializes_code_and_message_only() {
        let json = serde_json::to_value(ErrorResponse::new(ErrorCode::ValidationFailed, "nope")).unwrap();
        assert_eq!(json, serde_json::json!({"code": "VALIDATION_FAILED", "message": "nope"}));
    }
}
