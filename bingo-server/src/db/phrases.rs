//! SQLite-backed phrase store

use async_trait::async_trait;
use bingo_common::store::{phrase_not_found, require_text};
use bingo_common::{Error, Phrase, PhraseStore, Result};
use sqlx::SqlitePool;

/// Phrase store on the `phrases` table
#[derive(Debug, Clone)]
pub struct SqlitePhraseStore {
    pool: SqlitePool,
}

impl SqlitePhraseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| Error::Internal(format!("Invalid phrase count: {}", count)))
}

#[async_trait]
impl PhraseStore for SqlitePhraseStore {
    async fn list(&self) -> Result<Vec<Phrase>> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, text FROM phrases ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, text)| Phrase { id, text })
            .collect())
    }

    async fn add(&self, text: &str) -> Result<Phrase> {
        let text = require_text(text)?;

        // INTEGER PRIMARY KEY assigns max(id) + 1 (or 1 when empty) within the
        // insert itself, so concurrent adds never race for an id
        let id = sqlx::query("INSERT INTO phrases (text) VALUES (?)")
            .bind(&text)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Phrase { id, text })
    }

    async fn update(&self, id: i64, text: &str) -> Result<Phrase> {
        let text = require_text(text)?;
        let result = sqlx::query("UPDATE phrases SET text = ? WHERE id = ?")
            .bind(&text)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(phrase_not_found(id));
        }
        Ok(Phrase { id, text })
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM phrases WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(phrase_not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM phrases")
            .fetch_one(&self.pool)
            .await?;
        row_count(count)
    }
}
