//! Record-context middleware for `/post/{id}` routes
//!
//! Lookup failures never reject the request: they are logged and the
//! handler receives an empty `Post`.

use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::extractors::CurrentPost;
use crate::db::DbError;
use crate::models::Post;
use crate::state::AppState;

/// Load the post named by `{id}` and attach it to the request.
pub async fn post_context(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut request: Request,
    next: Next,
) -> Response {
    let post = load_post(&state, &id).await;
    request.extensions_mut().insert(CurrentPost(post));
    next.run(request).await
}

async fn load_post(state: &AppState, raw_id: &str) -> Post {
    if raw_id.is_empty() {
        return Post::default();
    }

    let id = match raw_id.parse::<i32>() {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(id = raw_id, error = %e, "post id is not an integer");
            return Post::default();
        }
    };

    match state.store().get(id).await {
        Ok(post) => post,
        Err(e @ DbError::NotFound { .. }) => {
            tracing::info!(id, "{}", e);
            Post::default()
        }
        Err(e) => {
            tracing::error!(id, error = %e, "failed to load post");
            Post::default()
        }
    }
}
