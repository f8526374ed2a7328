use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::common::{GameId, ReviewId, UserId};

/// A scored, commented association between one user and one game.
///
/// The only entity mutated through the HTTP surface; users and games are
/// seeded externally and referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: ReviewId,
    pub score: i64,
    pub comment: String,
    pub game_id: GameId,
    pub user_id: UserId,
}

// =============================================================================
// Review Queries
// =============================================================================

impl Review {
    pub async fn create(
        score: i64,
        comment: &str,
        game_id: GameId,
        user_id: UserId,
        pool: &SqlitePool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO reviews (score, comment, game_id, user_id)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(score)
        .bind(comment)
        .bind(game_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM reviews ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(id: ReviewId, pool: &SqlitePool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM reviews WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Apply a partial update: fields passed as `None` keep their stored
    /// values. Returns `None` when no review with that id exists.
    pub async fn update(
        id: ReviewId,
        score: Option<i64>,
        comment: Option<&str>,
        pool: &SqlitePool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE reviews
            SET score = COALESCE(?, score),
                comment = COALESCE(?, comment)
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(score)
        .bind(comment)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Returns whether a row was actually removed.
    pub async fn delete(id: ReviewId, pool: &SqlitePool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
