//! blogctl-server: server-rendered blog over a single `posts` table
//!
//! Lists, creates, shows, edits, and deletes posts. Record-scoped routes
//! resolve their post once in middleware and hand it to handlers as a
//! typed `CurrentPost`.

pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod views;

pub use db::{DbError, MemoryPostStore, PgPostStore, PostStore};
pub use http::{build_router, run_server, ApiError, ServerConfig};
pub use models::{Post, PostForm};
pub use state::AppState;
