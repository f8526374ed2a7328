use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::common::{ApiError, ApiResult, GameId};
use crate::domains::games::Game;
use crate::server::app::AppState;

pub async fn list_games(Extension(state): Extension<AppState>) -> ApiResult<Json<Vec<Game>>> {
    let games = Game::find_all(&state.db_pool).await?;
    Ok(Json(games))
}

pub async fn get_game(
    Extension(state): Extension<AppState>,
    Path(id): Path<GameId>,
) -> ApiResult<Json<Game>> {
    let game = Game::find_by_id(id, &state.db_pool)
        .await?
        .ok_or(ApiError::GameNotFound(id))?;
    Ok(Json(game))
}
