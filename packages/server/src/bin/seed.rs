// Seeds the user and game catalog. Safe to run repeatedly: existing
// games are matched by title and skipped, users by name.

use std::str::FromStr;

use anyhow::{Context, Result};
use server_core::config::Config;
use server_core::domains::games::Game;
use server_core::domains::users::User;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

struct GameInput {
    title: &'static str,
    genre: &'static str,
    platform: &'static str,
    price: f64,
}

const GAMES: &[GameInput] = &[
    GameInput {
        title: "Hollow Knight",
        genre: "Metroidvania",
        platform: "PC",
        price: 14.99,
    },
    GameInput {
        title: "Celeste",
        genre: "Platformer",
        platform: "Switch",
        price: 19.99,
    },
    GameInput {
        title: "Elden Ring",
        genre: "Action RPG",
        platform: "PS5",
        price: 59.99,
    },
    GameInput {
        title: "Stardew Valley",
        genre: "Simulation",
        platform: "PC",
        price: 13.99,
    },
];

const USERS: &[&str] = &["alice", "bob", "carol"];

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .context("DATABASE_URL is not a valid SQLite URL")?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;

    println!("✓ Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("\n🚀 Starting seed process...\n");

    let mut created_count = 0;
    let mut skipped_count = 0;

    for (idx, input) in GAMES.iter().enumerate() {
        println!("[{}/{}] Processing: {}", idx + 1, GAMES.len(), input.title);

        if Game::find_by_title(input.title, &pool).await?.is_some() {
            println!("  ⊘ Skipping (already exists)");
            skipped_count += 1;
            continue;
        }

        let game = Game::create(input.title, input.genre, input.platform, input.price, &pool)
            .await
            .with_context(|| format!("Failed to create game {}", input.title))?;
        println!("  ✓ Created game {}", game.id);
        created_count += 1;
    }

    for name in USERS {
        if find_user_by_name(name, &pool).await?.is_some() {
            skipped_count += 1;
            continue;
        }
        let user = User::create(name, &pool)
            .await
            .with_context(|| format!("Failed to create user {}", name))?;
        println!("  ✓ Created user {} ({})", user.name, user.id);
        created_count += 1;
    }

    println!(
        "\nDone: {} created, {} already present",
        created_count, skipped_count
    );

    Ok(())
}

// Names are not unique in the schema, so the lookup lives here with the
// seeder instead of on the model.
async fn find_user_by_name(name: &str, pool: &SqlitePool) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE name = ? LIMIT 1")
        .bind(name)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
}
