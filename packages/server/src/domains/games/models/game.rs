use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::common::GameId;

/// A catalog entry reviews point at. Titles are unique, which is what
/// the seed binary keys its existence checks on.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: f64,
}

impl Game {
    pub async fn create(
        title: &str,
        genre: &str,
        platform: &str,
        price: f64,
        pool: &SqlitePool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO games (title, genre, platform, price)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(genre)
        .bind(platform)
        .bind(price)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM games ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(id: GameId, pool: &SqlitePool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM games WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_title(title: &str, pool: &SqlitePool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM games WHERE title = ?")
            .bind(title)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}
