//! HTTP API server exposing blog content as JSON

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use futures_util::future::try_join_all;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::{blocks_to_markdown, excerpt_from_blocks, Post};
use crate::helpers::full_date;
use crate::notion::{NotionClient, NotionError};
use crate::Quill;

/// Shared state handed to every request handler
///
/// Requests are independent: the content source is re-queried every time
/// and nothing here is mutated after startup.
pub struct ServerState {
    notion: NotionClient,
    /// Whether API error responses include raw upstream detail
    expose_error_details: bool,
}

impl ServerState {
    /// Create server state around an injected Notion client
    pub fn new(notion: NotionClient, expose_error_details: bool) -> Self {
        Self {
            notion,
            expose_error_details,
        }
    }
}

/// One entry in the post listing
#[derive(Debug, Serialize)]
struct PostSummary {
    title: String,
    excerpt: String,
    date: String,
    slug: String,
}

/// A fully rendered post
#[derive(Debug, Serialize)]
struct FormattedPost {
    title: String,
    date: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ListResponse {
    posts: Vec<PostSummary>,
}

#[derive(Debug, Serialize)]
struct PostResponse {
    post: FormattedPost,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Build the API router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/blog", get(list_posts))
        .route("/api/blog/:slug", get(get_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server
pub async fn start(quill: &Quill, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(
        quill.notion.clone(),
        quill.config.is_development(),
    ));

    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("API server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /api/blog - list all published posts
async fn list_posts(State(state): State<Arc<ServerState>>) -> Response {
    match build_post_list(&state).await {
        Ok(posts) => Json(ListResponse { posts }).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch blog posts: {}", e);
            error_response(&state, "Failed to fetch posts", &e)
        }
    }
}

async fn build_post_list(state: &ServerState) -> Result<Vec<PostSummary>, NotionError> {
    let pages = state.notion.query_posts().await?;

    // Rows that fail validation are dropped, never surfaced as errors
    let posts: Vec<Post> = pages.iter().filter_map(Post::from_value).collect();

    // Fetch every post's blocks concurrently
    let blocks = try_join_all(
        posts
            .iter()
            .map(|post| state.notion.block_children(&post.id)),
    )
    .await?;

    Ok(posts
        .into_iter()
        .zip(blocks)
        .map(|(post, blocks)| PostSummary {
            title: post.title,
            excerpt: excerpt_from_blocks(&blocks),
            date: full_date(&post.date),
            slug: post.slug,
        })
        .collect())
}

/// GET /api/blog/{slug} - fetch one post with rendered markdown content
async fn get_post(State(state): State<Arc<ServerState>>, Path(slug): Path<String>) -> Response {
    if slug.trim().is_empty() {
        let body = ErrorResponse {
            error: "Slug parameter is required".to_string(),
            details: None,
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    match build_post(&state, &slug).await {
        Ok(post) => Json(PostResponse { post }).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch blog post {}: {}", slug, e);
            error_response(&state, "Failed to fetch post", &e)
        }
    }
}

async fn build_post(state: &ServerState, slug: &str) -> Result<FormattedPost, NotionError> {
    let page = state.notion.find_post_by_slug(slug).await?;
    let post =
        Post::from_value(&page).ok_or_else(|| NotionError::PostNotFound(slug.to_string()))?;

    let blocks = state.notion.block_children(&post.id).await?;

    Ok(FormattedPost {
        title: post.title,
        date: full_date(&post.date),
        content: blocks_to_markdown(&blocks),
    })
}

/// Build a 500 response, attaching raw detail only outside production
fn error_response(state: &ServerState, message: &str, error: &NotionError) -> Response {
    let body = ErrorResponse {
        error: message.to_string(),
        details: state.expose_error_details.then(|| error.to_string()),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
