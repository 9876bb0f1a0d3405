use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use tracing::error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid input body")]
    InvalidBody,

    #[error("advertisement id must be integer")]
    InvalidAdvertId,

    /// Comma-joined list of violated field rules.
    #[error("{0}")]
    Validation(String),

    #[error("unsupported ordering: {0}")]
    InvalidOrder(String),

    #[error("advertisements not found")]
    EmptyPage,

    #[error(transparent)]
    Dal(#[from] advert_dal::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidBody | ApiError::InvalidAdvertId => StatusCode::BAD_REQUEST,
            ApiError::EmptyPage => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::InvalidOrder(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Dal(e) => {
                error!("store failure: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
