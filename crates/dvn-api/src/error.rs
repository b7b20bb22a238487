//! # API Error Types
//!
//! [`AppError`] is what every handler returns on failure. It renders as
//! `{"error": {"code": ..., "message": ...}}` with a stable machine code.
//!
//! | Variant      | Status | Code               |
//! |--------------|--------|--------------------|
//! | `BadRequest` | 422    | `BAD_REQUEST`      |
//! | `Validation` | 422    | `VALIDATION_ERROR` |
//! | `NotFound`   | 404    | `NOT_FOUND`        |
//! | `Internal`   | 500    | `INTERNAL_ERROR`   |
//!
//! A body or query string that fails to deserialize and a value outside its domain (a date
//! like `2025-02-30`, an unknown case type) are both the caller's fault and
//! share 422; the code tells them apart.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use dvn_core::DvnError;

/// Envelope for every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error code and text.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `BAD_REQUEST`, `VALIDATION_ERROR`, `NOT_FOUND`, `INTERNAL_ERROR`.
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    fn new(code: &str, message: String) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// The body could not be read as the expected JSON shape.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The body parsed but a value is out of its domain.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Logged in full, returned to the client as a generic message.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DvnError> for AppError {
    /// Core errors only arise from parsing caller input.
    fn from(err: DvnError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = ErrorBody::new(self.code(), self.client_message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, ErrorBody) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn invalid_date_is_validation_error() {
        let err: AppError = DvnError::InvalidDate {
            input: "2025-02-30".into(),
        }
        .into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert!(body.error.message.contains("2025-02-30"));
    }

    #[tokio::test]
    async fn bad_request_shares_422() {
        let (status, body) = render(AppError::BadRequest("missing field".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.code, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn internal_detail_not_leaked() {
        let (status, body) = render(AppError::Internal("recorder poisoned".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.message, "An internal error occurred");
    }

    #[tokio::test]
    async fn unknown_citation_is_404() {
        let (status, body) = render(AppError::NotFound("citation Ohio Rev. Code 1.1".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.error.message.contains("Ohio Rev. Code 1.1"));
    }
}
