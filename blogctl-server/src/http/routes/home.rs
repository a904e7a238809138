//! Landing page and the plain-text user info endpoint

use axum::response::Html;
use axum::{routing::get, Router};

use crate::http::error::ApiError;
use crate::state::AppState;
use crate::views::{render, HomePage};

const HOME_NAME: &str = "John Doe";
const USER_INFO: &str = "User Info from API server";

/// GET /
async fn home() -> Result<Html<String>, ApiError> {
    render(&HomePage { name: HOME_NAME })
}

/// GET /user-info
async fn user_info() -> &'static str {
    USER_INFO
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/user-info", get(user_info))
}
