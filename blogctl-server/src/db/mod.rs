//! Database layer - connection pool and post storage
//!
//! Handlers never hold a global connection. A `PostStore` is built once at
//! startup and handed to router construction:
//!
//! - `PgPostStore` runs single statements against PostgreSQL
//! - `MemoryPostStore` keeps rows in process for tests and local runs

pub mod memory;
pub mod pool;
pub mod repos;

pub use memory::MemoryPostStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
