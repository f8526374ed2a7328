use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::{ApiError, ApiResult, GameId, ReviewId, UserId};
use crate::domains::reviews::Review;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub score: i64,
    pub comment: String,
    pub game_id: GameId,
    pub user_id: UserId,
}

/// PATCH payload - absent fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateReview {
    pub score: Option<i64>,
    pub comment: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    delete_successful: bool,
}

pub async fn list_reviews(
    Extension(state): Extension<AppState>,
) -> ApiResult<Json<Vec<Review>>> {
    let reviews = Review::find_all(&state.db_pool).await?;
    Ok(Json(reviews))
}

pub async fn get_review(
    Extension(state): Extension<AppState>,
    Path(id): Path<ReviewId>,
) -> ApiResult<Json<Review>> {
    let review = Review::find_by_id(id, &state.db_pool)
        .await?
        .ok_or(ApiError::ReviewNotFound(id))?;
    Ok(Json(review))
}

pub async fn create_review(
    Extension(state): Extension<AppState>,
    Json(body): Json<CreateReview>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let review = Review::create(
        body.score,
        &body.comment,
        body.game_id,
        body.user_id,
        &state.db_pool,
    )
    .await?;

    tracing::debug!(review_id = %review.id, game_id = %review.game_id, "review created");

    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn update_review(
    Extension(state): Extension<AppState>,
    Path(id): Path<ReviewId>,
    Json(body): Json<UpdateReview>,
) -> ApiResult<Json<Review>> {
    let review = Review::update(id, body.score, body.comment.as_deref(), &state.db_pool)
        .await?
        .ok_or(ApiError::ReviewNotFound(id))?;
    Ok(Json(review))
}

pub async fn delete_review(
    Extension(state): Extension<AppState>,
    Path(id): Path<ReviewId>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = Review::delete(id, &state.db_pool).await?;
    if !deleted {
        return Err(ApiError::ReviewNotFound(id));
    }

    tracing::debug!(review_id = %id, "review deleted");

    Ok(Json(DeleteResponse {
        delete_successful: true,
    }))
}
