//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use server_core::common::{GameId, ReviewId, UserId};
use server_core::domains::games::Game;
use server_core::domains::reviews::Review;
use server_core::domains::users::User;
use sqlx::SqlitePool;

/// Create a test user
pub async fn create_test_user(pool: &SqlitePool, name: &str) -> Result<UserId> {
    let user = User::create(name, pool).await?;
    Ok(user.id)
}

/// Create a test game
pub async fn create_test_game(pool: &SqlitePool, title: &str) -> Result<GameId> {
    let game = Game::create(
        title,
        "Action", // genre
        "PC",     // platform
        60.0,     // price
        pool,
    )
    .await?;
    Ok(game.id)
}

/// Create a test review
pub async fn create_test_review(
    pool: &SqlitePool,
    score: i64,
    comment: &str,
    game_id: GameId,
    user_id: UserId,
) -> Result<ReviewId> {
    let review = Review::create(score, comment, game_id, user_id, pool).await?;
    Ok(review.id)
}

/// Seed the canonical test scenario: one user, one game, one review.
///
/// Returns the seeded review's id.
pub async fn seed_review_scenario(pool: &SqlitePool) -> Result<ReviewId> {
    let user_id = create_test_user(pool, "Test User").await?;
    let game_id = create_test_game(pool, "Test Game Unique").await?;
    create_test_review(pool, 8, "Great game!", game_id, user_id).await
}
