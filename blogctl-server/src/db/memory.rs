//! In-process post storage
//!
//! Mirrors the PostgreSQL repository: ids come from a counter that never
//! reuses a value, and listing is ordered by id.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repos::{DbError, PostStore};
use crate::models::Post;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Post>,
    last_id: i32,
}

/// Post storage held in memory, lost on shutdown
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    table: RwLock<Table>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, DbError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Post, DbError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::post_not_found(id))
    }

    async fn insert(&self, title: &str, description: &str) -> Result<u64, DbError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            Post {
                id,
                title: title.to_owned(),
                description: description.to_owned(),
            },
        );
        Ok(1)
    }

    async fn update(&self, id: i32, title: &str, description: &str) -> Result<u64, DbError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(post) => {
                post.title = title.to_owned();
                post.description = description.to_owned();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
