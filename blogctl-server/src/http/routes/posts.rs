//! Post pages
//!
//! `/posts` and `/post/create` are public. Routes under `/post/{id}` sit
//! behind `post_context` and receive the resolved post as `CurrentPost`.

use axum::{
    extract::{Path, State},
    middleware,
    response::{Html, Redirect},
    routing::{delete, get},
    Form, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::CurrentPost;
use crate::http::middleware::post_context;
use crate::models::PostForm;
use crate::state::AppState;
use crate::views::{render, PostDetailPage, PostFormPage, PostListPage};

const LIST_HEADING: &str = "Article List";
const CREATED: &str = "Post created successfully.";
const UPDATED: &str = "Post updated successfully.";

/// GET /posts
async fn list_posts(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let posts = state.store().list().await?;
    render(&PostListPage {
        heading: LIST_HEADING,
        posts: &posts,
    })
}

/// GET /post/create
async fn new_post() -> Result<Html<String>, ApiError> {
    render(&PostFormPage {
        post: None,
        success: None,
    })
}

/// POST /post/create - insert, then show a fresh form
async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> Result<Html<String>, ApiError> {
    let affected = state
        .store()
        .insert(&form.title, &form.description)
        .await?;

    let success = (affected == 1).then_some(CREATED);
    if success.is_none() {
        tracing::warn!(affected, "insert did not create exactly one post");
    }

    render(&PostFormPage {
        post: None,
        success,
    })
}

/// GET /post/{id}
async fn show_post(CurrentPost(post): CurrentPost) -> Result<Html<String>, ApiError> {
    render(&PostDetailPage { post: &post })
}

/// GET /post/{id}/edit
async fn edit_post_form(CurrentPost(post): CurrentPost) -> Result<Html<String>, ApiError> {
    render(&PostFormPage {
        post: Some(&post),
        success: None,
    })
}

/// POST /post/{id}/edit - update in place, re-render with submitted values
async fn update_post(
    State(state): State<AppState>,
    CurrentPost(post): CurrentPost,
    Form(form): Form<PostForm>,
) -> Result<Html<String>, ApiError> {
    let affected = state
        .store()
        .update(post.id, &form.title, &form.description)
        .await?;

    let success = (affected == 1).then_some(UPDATED);
    if success.is_none() {
        tracing::warn!(id = post.id, affected, "update did not match exactly one post");
    }

    let post = post.with_form(form);
    render(&PostFormPage {
        post: Some(&post),
        success,
    })
}

/// DELETE|POST /post/{id}/delete - 303 to the list, 404 when nothing was removed
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    CurrentPost(post): CurrentPost,
) -> Result<Redirect, ApiError> {
    match state.store().delete(post.id).await? {
        1 => {
            tracing::info!(id = post.id, "post deleted");
            Ok(Redirect::to("/posts"))
        }
        affected => {
            tracing::warn!(id = %id, affected, "delete matched no post");
            Err(ApiError::NotFound {
                resource: "post",
                id,
            })
        }
    }
}

/// Post routes
pub fn router(state: AppState) -> Router<AppState> {
    let scoped = Router::new()
        .route("/post/{id}", get(show_post))
        .route("/post/{id}/edit", get(edit_post_form).post(update_post))
        .route("/post/{id}/delete", delete(delete_post).post(delete_post))
        .route_layer(middleware::from_fn_with_state(state, post_context));

    Router::new()
        .route("/posts", get(list_posts))
        .route("/post/create", get(new_post).post(create_post))
        .merge(scoped)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use tower::ServiceExt;

    use crate::db::{DbError, MemoryPostStore, PostStore};
    use crate::http::build_router;
    use crate::models::Post;
    use crate::state::AppState;

    fn app() -> Router {
        build_router(AppState::new(MemoryPostStore::new()))
    }

    async fn send(app: &Router, method: Method, uri: &str, form: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(form) => {
                builder = builder.header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                );
                Body::from(form.to_owned())
            }
            None => Body::empty(),
        };

        app.clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get_text(app: &Router, uri: &str) -> String {
        let response = send(app, Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        text(response).await
    }

    #[tokio::test]
    async fn create_then_list_detail_delete() {
        let app = app();

        let response = send(
            &app,
            Method::POST,
            "/post/create",
            Some("title=Hello&description=World"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = text(response).await;
        assert!(body.contains("Post created successfully."));
        assert!(body.contains(r#"action="/post/create""#));

        let list = get_text(&app, "/posts").await;
        assert!(list.contains("Article List"));
        assert!(list.contains(r#"<a href="/post/1">Hello</a>"#));
        assert!(list.contains("World"));

        let detail = get_text(&app, "/post/1").await;
        assert!(detail.contains(r#"<h1 class="post-title">Hello</h1>"#));
        assert!(detail.contains("World"));

        let response = send(&app, Method::DELETE, "/post/1/delete", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/posts");

        let list = get_text(&app, "/posts").await;
        assert!(!list.contains(r#"href="/post/1""#));
        assert!(list.contains("No posts yet."));
    }

    #[tokio::test]
    async fn create_accepts_empty_fields() {
        let app = app();

        let response = send(&app, Method::POST, "/post/create", Some("")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Post created successfully."));

        let detail = get_text(&app, "/post/1").await;
        assert!(detail.contains(r#"<h1 class="post-title"></h1>"#));
        assert!(detail.contains("/post/1/edit"));
    }

    #[tokio::test]
    async fn create_form_renders_empty() {
        let body = get_text(&app(), "/post/create").await;
        assert!(body.contains("New post"));
        assert!(!body.contains("successfully"));
    }

    #[tokio::test]
    async fn edit_updates_fields_and_keeps_id() {
        let app = app();
        send(&app, Method::POST, "/post/create", Some("title=Old&description=Before")).await;

        let form = get_text(&app, "/post/1/edit").await;
        assert!(form.contains(r#"value="Old""#));
        assert!(form.contains("Before"));

        let response = send(
            &app,
            Method::POST,
            "/post/1/edit",
            Some("title=New+title&description=After"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = text(response).await;
        assert!(body.contains("Post updated successfully."));
        assert!(body.contains(r#"value="New title""#));
        assert!(body.contains(r#"action="/post/1/edit""#));

        let detail = get_text(&app, "/post/1").await;
        assert!(detail.contains(r#"<h1 class="post-title">New title</h1>"#));
        assert!(detail.contains("After"));

        let list = get_text(&app, "/posts").await;
        assert!(list.contains(r#"<a href="/post/1">New title</a>"#));
        assert!(!list.contains("Old"));
    }

    #[tokio::test]
    async fn edit_unknown_post_reports_no_success() {
        let app = app();
        let response = send(&app, Method::POST, "/post/5/edit", Some("title=x&description=y")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!text(response).await.contains("successfully"));
        assert!(get_text(&app, "/posts").await.contains("No posts yet."));
    }

    #[tokio::test]
    async fn delete_unknown_post_is_not_found() {
        let app = app();
        let response = send(&app, Method::DELETE, "/post/42/delete", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert_eq!(text(response).await, "post '42' not found");
    }

    #[tokio::test]
    async fn delete_accepts_form_post() {
        let app = app();
        send(&app, Method::POST, "/post/create", Some("title=a&description=b")).await;

        let response = send(&app, Method::POST, "/post/1/delete", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = send(&app, Method::POST, "/post/1/delete", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn detail_of_unknown_post_renders_empty_record() {
        let app = app();
        let detail = get_text(&app, "/post/999").await;
        assert!(detail.contains(r#"<h1 class="post-title"></h1>"#));
        assert!(!detail.contains("/edit"));

        let detail = get_text(&app, "/post/not-a-number").await;
        assert!(detail.contains(r#"<h1 class="post-title"></h1>"#));
    }

    #[tokio::test]
    async fn create_route_is_not_captured_by_id() {
        let body = get_text(&app(), "/post/create").await;
        assert!(!body.contains("post-title"));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let app = app();
        for title in ["first", "second", "third"] {
            let form = format!("title={title}&description=x");
            send(&app, Method::POST, "/post/create", Some(form.as_str())).await;
        }

        let list = get_text(&app, "/posts").await;
        let first = list.find("first").unwrap();
        let second = list.find("second").unwrap();
        let third = list.find("third").unwrap();
        assert!(first < second && second < third);
    }

    /// Store whose every call fails like a dropped connection.
    struct BrokenStore;

    #[async_trait]
    impl PostStore for BrokenStore {
        async fn list(&self) -> Result<Vec<Post>, DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn get(&self, _id: i32) -> Result<Post, DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn insert(&self, _title: &str, _description: &str) -> Result<u64, DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn update(&self, _id: i32, _title: &str, _description: &str) -> Result<u64, DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn delete(&self, _id: i32) -> Result<u64, DbError> {
            Err(sqlx::Error::PoolClosed.into())
        }
    }

    #[tokio::test]
    async fn storage_failure_is_500_per_request() {
        let app = build_router(AppState::new(BrokenStore));

        let response = send(&app, Method::GET, "/posts", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = send(&app, Method::POST, "/post/create", Some("title=a&description=b")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Lookup failures in the record context are swallowed
        let detail = get_text(&app, "/post/1").await;
        assert!(detail.contains(r#"<h1 class="post-title"></h1>"#));

        let response = send(&app, Method::DELETE, "/post/1/delete", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
