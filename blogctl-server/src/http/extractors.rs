//! Custom Axum extractors

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::Post;

/// Post resolved by `post_context` for the current request.
///
/// Holds `Post::default()` when the path id did not resolve to a row.
#[derive(Debug, Clone, Default)]
pub struct CurrentPost(pub Post);

impl<S> FromRequestParts<S> for CurrentPost
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentPost>()
            .cloned()
            .ok_or_else(|| ApiError::Internal {
                message: format!("no post context for {}", parts.uri.path()),
            })
    }
}
