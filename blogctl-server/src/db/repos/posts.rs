//! PostgreSQL post repository
//!
//! Expects a pre-existing `posts (id SERIAL PRIMARY KEY, title TEXT,
//! description TEXT)` table. No migrations are run from here.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, PostStore};
use crate::models::Post;

/// Post repository backed by a connection pool
#[derive(Debug, Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection. Waits for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn list(&self) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, title, description FROM posts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn get(&self, id: i32) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>("SELECT id, title, description FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::post_not_found(id))
    }

    async fn insert(&self, title: &str, description: &str) -> Result<u64, DbError> {
        let result = sqlx::query("INSERT INTO posts (title, description) VALUES ($1, $2)")
            .bind(title)
            .bind(description)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: i32, title: &str, description: &str) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE posts SET title = $1, description = $2 WHERE id = $3")
            .bind(title)
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
