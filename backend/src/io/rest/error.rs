//! Translation of domain failures into HTTP responses.
//!
//! Every non-2xx body is a [`shared::ErrorResponse`]. Internal failures are
//! logged in full and answered with a generic message; the underlying detail
//! is only attached when the server runs in development mode.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use thiserror::Error;
use tracing::error;

use crate::domain::CampServiceError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal server error")]
    Internal { detail: Option<String> },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let detail = match self {
            ApiError::Internal { detail } => detail,
            _ => None,
        };
        (status, Json(ErrorResponse { error, detail })).into_response()
    }
}

/// How much of an internal failure a response may reveal
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorPolicy {
    pub expose_internal_errors: bool,
}

impl ErrorPolicy {
    pub fn new(expose_internal_errors: bool) -> Self {
        Self {
            expose_internal_errors,
        }
    }

    /// Log an unexpected failure and build the 500 response for it
    pub fn internal(&self, context: &str, err: &anyhow::Error) -> ApiError {
        error!("{}: {:?}", context, err);
        ApiError::Internal {
            detail: self.expose_internal_errors.then(|| format!("{:#}", err)),
        }
    }

    pub fn service_error(&self, context: &str, err: CampServiceError) -> ApiError {
        match err {
            CampServiceError::NotFound(_) => ApiError::NotFound("Camp not found".to_string()),
            CampServiceError::Forbidden(message) => ApiError::Forbidden(message),
            CampServiceError::Invalid(message) => ApiError::BadRequest(message),
            CampServiceError::Storage(e) => self.internal(context, &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_internal_detail_follows_policy() {
        let err = anyhow!("disk on fire");

        match ErrorPolicy::new(false).internal("Searching camps", &err) {
            ApiError::Internal { detail } => assert_eq!(detail, None),
            other => panic!("unexpected {:?}", other),
        }
        match ErrorPolicy::new(true).internal("Searching camps", &err) {
            ApiError::Internal { detail } => assert_eq!(detail.as_deref(), Some("disk on fire")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_service_errors_map_to_statuses() {
        let policy = ErrorPolicy::default();
        let cases = [
            (CampServiceError::NotFound("camp::1".to_string()), StatusCode::NOT_FOUND),
            (CampServiceError::Forbidden("no".to_string()), StatusCode::FORBIDDEN),
            (CampServiceError::Invalid("bad".to_string()), StatusCode::BAD_REQUEST),
            (CampServiceError::Storage(anyhow!("down")), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(policy.service_error("test", err).status(), status);
        }
    }
}
