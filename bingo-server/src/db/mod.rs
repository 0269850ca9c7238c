//! Database access for bingo-server
//!
//! Phrases live in a single SQLite table.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;

mod phrases;
pub use phrases::SqlitePhraseStore;

/// Open (creating if needed) the phrase database
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // mode=rwc: read, write, create
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url)
        .await
        .context("Failed to connect to phrase database")?;

    init_tables(&pool).await?;

    Ok(pool)
}

/// Create the phrases table if it doesn't exist
pub async fn init_tables(pool: &SqlitePool) -> bingo_common::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS phrases (
            id INTEGER PRIMARY KEY,
            text TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
