//! Post storage contract and its PostgreSQL implementation
//!
//! Every operation is one statement. Write operations report the number of
//! affected rows; callers decide what a count other than one means.

pub mod posts;

use async_trait::async_trait;

use crate::models::Post;

pub use posts::PgPostStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn post_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "post",
            id: id.to_string(),
        }
    }
}

/// Storage client for posts, shared by every request.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, ordered by id.
    async fn list(&self) -> Result<Vec<Post>, DbError>;

    /// A single post; `DbError::NotFound` when the id is unknown.
    async fn get(&self, id: i32) -> Result<Post, DbError>;

    /// Insert a post, returning rows affected.
    async fn insert(&self, title: &str, description: &str) -> Result<u64, DbError>;

    /// Overwrite title and description by id, returning rows affected.
    async fn update(&self, id: i32, title: &str, description: &str) -> Result<u64, DbError>;

    /// Remove a post by id, returning rows affected.
    async fn delete(&self, id: i32) -> Result<u64, DbError>;
}
