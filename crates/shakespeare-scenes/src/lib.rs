//! Shakespeare Scenes - full-text search and reading pages for the plays.
//!
//! A small read-only web application over a PostgreSQL corpus of works and
//! scenes.
//!
//! # Architecture
//!
//! - **Routes**: Map paths to handlers (`/` for home and search, `/scene`)
//! - **Params**: Validate query parameters before any database access
//! - **Query**: The [`query::SceneStore`] gateway (work, scene, search)
//! - **Render**: Per-page view models rendered with maud (compile-time templates)
//!
//! # URL Pattern
//!
//! ```text
//! GET /?q={search text}
//! GET /scene?a={act}&s={scene}&w={work id}
//! ```
//!
//! # Security
//!
//! - Every SQL statement uses bound parameters
//! - All dynamic content is HTML-escaped by maud, except scene bodies and
//!   search headlines, which come from the corpus itself
//! - Invalid parameters answer 404 without saying which one was wrong
//! - Strict Content-Security-Policy: no JavaScript execution

pub mod config;
pub mod error;
pub mod params;
pub mod query;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
