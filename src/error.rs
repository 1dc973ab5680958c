use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::identity::IdentityError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error taxonomy for the HTTP API. Every handler returns one of these at
/// its boundary; the client always sees a JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid input.
    #[error("{0}")]
    Validation(String),

    /// Bad credentials, unconfirmed email, or a caller acting outside its
    /// own account.
    #[error("{0}")]
    Auth(String),

    /// Missing header, malformed bearer prefix, bad signature or expiry.
    /// Collapsed to one message so the response does not reveal which.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{0}")]
    NotFound(String),

    /// Identity provider or object storage failure.
    #[error("upstream service failure: {0}")]
    Upstream(String),

    #[error("Internal server error")]
    Unexpected(anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Auth(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) | ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Unexpected(e)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
            other => ApiError::Unexpected(other.into()),
        }
    }
}

impl From<IdentityError> for ApiError {
    fn from(e: IdentityError) -> Self {
        match e {
            // Provider rejections carry a message meant for the client
            // (duplicate email, invalid credentials, ...).
            IdentityError::Rejected(msg) => ApiError::Auth(msg),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            match &self {
                ApiError::Unexpected(source) => error!(error = ?source, "request failed"),
                other => error!(error = %other, "request failed"),
            }
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn validation_error_renders_json_error_body() {
        let response = ApiError::Validation("role must be employer or job_seeker".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "role must be employer or job_seeker");
    }

    #[tokio::test]
    async fn unexpected_error_hides_detail_from_client() {
        let response =
            ApiError::Unexpected(anyhow::anyhow!("connection refused (db=10.0.0.3)"))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
    }

    #[test]
    fn identity_rejection_maps_to_auth_400() {
        let err: ApiError = IdentityError::Rejected("User already registered".into()).into();
        assert!(matches!(err, ApiError::Auth(ref m) if m == "User already registered"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn token_failures_share_one_message() {
        assert_eq!(ApiError::InvalidToken.to_string(), "Invalid or expired token");
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
    }
}
