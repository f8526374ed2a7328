use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use super::{GameId, ReviewId, UserId};

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP handlers.
///
/// NotFound variants carry the id that missed so the client-facing
/// message can name it. Everything else collapses to a 500 with the
/// details kept server-side.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("review {0} does not exist")]
    ReviewNotFound(ReviewId),
    #[error("user {0} does not exist")]
    UserNotFound(UserId),
    #[error("game {0} does not exist")]
    GameNotFound(GameId),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::ReviewNotFound(_) | ApiError::UserNotFound(_) | ApiError::GameNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiError::Database(_) | ApiError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
