use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use discography_core::StorageError;
use thiserror::Error;
use tracing::error;

use crate::form::FormError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every way a request can fail.
///
/// All of them answer `500 Internal Server Error` with an empty body; the
/// cause is only written to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),
    #[error("malformed form data: {0}")]
    Form(#[from] FormError),
    #[error("storage operation failed: {0}")]
    Storage(#[from] StorageError),
    #[error("response serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn storage_error_is_an_empty_500() {
        let response =
            AppError::from(StorageError::Unavailable("connection refused".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn form_error_is_an_empty_500() {
        let response = AppError::from(FormError::InvalidEscape("%ZZ".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
