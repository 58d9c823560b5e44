use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::error::TodoError;

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody { pub detail: String }

#[derive(Debug, Error)]
pub enum ApiError {
    /// Carries the requested id as written in the request.
    #[error("Todo {0} not found")]
    NotFound(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        match &e {
            TodoError::Validation { .. } => {
                tracing::warn!(error = %e, "rejected todo input");
                ApiError::Unprocessable(e.to_string())
            }
            TodoError::NotFound(id) => {
                tracing::debug!(todo_id = %id, "todo not found");
                ApiError::NotFound(id.to_string())
            }
            TodoError::Internal(err) => {
                tracing::error!(error = ?err, "store failure");
                ApiError::Internal
            }
        }
    }
}

macro_rules! unprocessable_rejection {
    ($($rejection:ty),*) => {
        $(impl From<$rejection> for ApiError {
            fn from(rejection: $rejection) -> Self {
                tracing::warn!(error = %rejection, "malformed request");
                ApiError::Unprocessable(rejection.body_text())
            }
        })*
    };
}

unprocessable_rejection!(JsonRejection, PathRejection, QueryRejection);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), axum::Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}
