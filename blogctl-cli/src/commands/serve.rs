//! HTTP server command
//!
//! Owns the storage client: the pool is opened before the server starts
//! and closed after it stops.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use blogctl_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};
use blogctl_server::{run_server, AppState, MemoryPostStore, PgPostStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep posts in memory instead of PostgreSQL (lost on exit).
    /// Any database URL is ignored.
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    if args.in_memory {
        tracing::warn!("Using in-memory storage; posts are lost on shutdown");
        return run_server(AppState::new(MemoryPostStore::new()), config)
            .await
            .context("Server error");
    }

    let database_url = args.database_url.context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or ~/.blogctl/.env",
    )?;

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;
    let store = PgPostStore::new(pool);

    let result = run_server(AppState::new(store.clone()), config).await;

    store.close().await;
    tracing::info!("Database pool closed");

    result.context("Server error")
}
