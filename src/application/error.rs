use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Unified service error used across use cases and handlers.
///
/// Status codes reproduce the historical wire contract: the registration
/// and login paths answer 400 for every caller mistake (including unknown
/// users), while bad tokens and invisible or foreign resources answer 401
/// with the literal body `Invalid Request` / `Invalid JWT Token`. Bodies
/// are plain text; there are no structured error codes on this surface.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Input fails a shape or length rule. HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Duplicate username. HTTP 400 (not 409 — preserved behavior).
    #[error("{0}")]
    Conflict(String),

    /// Unknown user on the login path. HTTP 400.
    #[error("{0}")]
    NotFound(String),

    /// Bad credentials, bad token, failed ownership or visibility. HTTP 401.
    #[error("{0}")]
    Auth(String),

    /// Unexpected DB/runtime failure. HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// The 401 body shared by every visibility and ownership rejection.
    pub fn invalid_request() -> Self {
        ServiceError::Auth("Invalid Request".into())
    }

    /// The 401 body shared by every token rejection.
    pub fn invalid_token() -> Self {
        ServiceError::Auth("Invalid JWT Token".into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::BAD_REQUEST,
            ServiceError::Auth(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(serde_json::json!({"message": "Internal Server Error"})),
                )
                    .into_response()
            }
            other => (other.status_code(), other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(
            ServiceError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Conflict("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::NotFound("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Auth("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn canned_bodies() {
        assert_eq!(ServiceError::invalid_request().to_string(), "Invalid Request");
        assert_eq!(ServiceError::invalid_token().to_string(), "Invalid JWT Token");
    }
}
