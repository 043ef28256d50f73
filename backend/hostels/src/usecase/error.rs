use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::repository::errors::RepositoryError;
use crate::usecase::jwt::JwtError;

#[derive(Debug, Error)]
pub enum UsecaseError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for UsecaseError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => UsecaseError::NotFound("Resource".to_string()),
            RepositoryError::Conflict(_) => UsecaseError::Conflict(e.to_string()),
        }
    }
}

impl From<JwtError> for UsecaseError {
    fn from(e: JwtError) -> Self {
        match e {
            JwtError::TokenGenerationError(msg) => UsecaseError::Internal(msg),
            other => UsecaseError::Unauthorized(other.to_string()),
        }
    }
}

impl IntoResponse for UsecaseError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            UsecaseError::NotFound(_) => StatusCode::NOT_FOUND,
            UsecaseError::Forbidden(_) => StatusCode::FORBIDDEN,
            UsecaseError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            UsecaseError::Validation(_) => StatusCode::BAD_REQUEST,
            UsecaseError::Conflict(_) => StatusCode::CONFLICT,
            UsecaseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            UsecaseError::Internal(_) => {
                tracing::error!(error = %self, "internal error");
            }
            UsecaseError::NotFound(_) => {
                tracing::warn!(error = %self, "resource not found");
            }
            UsecaseError::Forbidden(_) | UsecaseError::Unauthorized(_) => {
                tracing::warn!(error = %self, "access denied");
            }
            _ => {
                tracing::debug!(error = %self);
            }
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (UsecaseError::NotFound("Hostel".to_string()), StatusCode::NOT_FOUND),
            (UsecaseError::Forbidden("no".to_string()), StatusCode::FORBIDDEN),
            (UsecaseError::Unauthorized("no".to_string()), StatusCode::UNAUTHORIZED),
            (UsecaseError::Validation("bad".to_string()), StatusCode::BAD_REQUEST),
            (UsecaseError::Conflict("dup".to_string()), StatusCode::CONFLICT),
            (UsecaseError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_message() {
        let error = UsecaseError::NotFound("College".to_string());
        assert_eq!(error.to_string(), "College not found");
    }

    #[test]
    fn test_from_repository_error() {
        let error: UsecaseError = RepositoryError::Conflict("user a@b.c".to_string()).into();
        assert!(matches!(error, UsecaseError::Conflict(ref msg) if msg == "user a@b.c already exists"));
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let error: UsecaseError = JwtError::TokenExpired.into();
        assert!(matches!(error, UsecaseError::Unauthorized(_)));
    }
}
