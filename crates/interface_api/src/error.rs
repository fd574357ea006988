//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::CoreError;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::session::SessionError;

/// API error types
///
/// Ledger edits that cannot apply are not errors at this level; they come
/// back as a session view with a notice.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String, Vec<String>),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable", msg, None)
            }
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
            ApiError::Validation(msg, details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg,
                Some(details),
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SessionError::CapacityReached(_) => ApiError::Unavailable(err.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            // An id that cannot be read names nothing that exists
            CoreError::InvalidIdentifier { .. } => ApiError::NotFound(err.to_string()),
            CoreError::Configuration(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        let details = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        ApiError::Validation("Request failed validation".to_string(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::SessionId;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Unavailable("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::Validation("x".into(), vec![]), StatusCode::UNPROCESSABLE_ENTITY),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_core_errors_map() {
        assert!(matches!(
            ApiError::from(CoreError::invalid_identifier("SessionId", "x")),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(CoreError::configuration("x")),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_session_errors_map() {
        let missing: ApiError = SessionError::NotFound(SessionId::new()).into();
        let full: ApiError = SessionError::CapacityReached(5).into();

        assert!(matches!(missing, ApiError::NotFound(_)));
        assert!(matches!(full, ApiError::Unavailable(_)));
    }
}
