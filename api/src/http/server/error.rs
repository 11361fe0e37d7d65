use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use feed_core::domain::common::CoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingField { .. } => ApiError::BadRequest(err.to_string()),
            CoreError::PostNotFound { .. }
            | CoreError::CommentNotFound { .. }
            | CoreError::TopicNotFound { .. }
            | CoreError::UserStatusNotFound { .. } => ApiError::NotFound(err.to_string()),
            CoreError::StoreUnavailable { .. } => ApiError::ServiceUnavailable(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
