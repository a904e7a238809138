//! Post record and its submitted form

use serde::Deserialize;
use sqlx::FromRow;

/// Post row from the `posts` table.
///
/// `Post::default()` is the zero-value record handed to scoped handlers
/// when the id in the path does not resolve to a stored row.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl Post {
    /// Whether this record was loaded from storage (ids start at 1).
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Copy of this post carrying submitted field values, keeping the id.
    pub fn with_form(&self, form: PostForm) -> Self {
        Self {
            id: self.id,
            title: form.title,
            description: form.description,
        }
    }
}

/// Create/edit form body (`application/x-www-form-urlencoded`).
///
/// Missing fields deserialize to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
