//! Route definitions.
//!
//! ## Routes
//!
//! - `GET /` - Home page, or search results when `q` is set
//! - `GET /scene` - Single scene (`a` = act, `s` = scene, `w` = work id)
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//!
//! Anything else gets the standard not-found page.

mod health;
mod scene;
mod search;

use axum::Router;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::error::PageError;
use crate::state::AppState;

/// Build the complete application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search::search_handler))
        .route("/scene", get(scene::scene_handler))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .fallback(not_found)
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

async fn not_found(uri: Uri) -> PageError {
    PageError::NotFound(format!("route {}", uri.path()))
}
