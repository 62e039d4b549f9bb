//! HTTP-facing errors.
//!
//! Every body carries a `detail` key: a message string for 404/500, a list
//! of field errors for 422.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::{FieldError, ValidationError};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Todo not found")]
    NotFound { todo_id: i64 },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { todo_id } => Self::NotFound { todo_id },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<FieldError> for ApiError {
    fn from(e: FieldError) -> Self {
        Self::Validation(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => {
                tracing::debug!(%e, "rejected request");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({ "detail": e.errors }),
                )
            }
            Self::NotFound { todo_id } => {
                tracing::debug!(todo_id, "todo not found");
                (StatusCode::NOT_FOUND, json!({ "detail": "Todo not found" }))
            }
            Self::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
