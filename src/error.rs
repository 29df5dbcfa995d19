use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::queue::EnqueueError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<EnqueueError> for ApiError {
    fn from(value: EnqueueError) -> Self {
        error!("enqueue error: {value}");
        ApiError::Internal("Failed to schedule reminder".into())
    }
}
