use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::common::{ApiError, ApiResult, UserId};
use crate::domains::users::User;
use crate::server::app::AppState;

pub async fn list_users(Extension(state): Extension<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::find_all(&state.db_pool).await?;
    Ok(Json(users))
}

pub async fn get_user(
    Extension(state): Extension<AppState>,
    Path(id): Path<UserId>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(id, &state.db_pool)
        .await?
        .ok_or(ApiError::UserNotFound(id))?;
    Ok(Json(user))
}
