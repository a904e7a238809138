//! HTML pages rendered with askama
//!
//! Templates live in `templates/` and are checked at compile time. Values
//! are HTML-escaped on output.

use askama::Template;
use axum::response::Html;

use crate::http::ApiError;
use crate::models::Post;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomePage<'a> {
    pub name: &'a str,
}

#[derive(Template)]
#[template(path = "pages/post.html")]
pub struct PostListPage<'a> {
    pub heading: &'a str,
    pub posts: &'a [Post],
}

/// Shared create/edit form. `post` is `None` on the create route.
#[derive(Template)]
#[template(path = "pages/post_form.html")]
pub struct PostFormPage<'a> {
    pub post: Option<&'a Post>,
    pub success: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "pages/post_detail.html")]
pub struct PostDetailPage<'a> {
    pub post: &'a Post,
}

/// Render a page into an HTML response body.
pub fn render<T: Template>(page: &T) -> Result<Html<String>, ApiError> {
    Ok(Html(page.render()?))
}
