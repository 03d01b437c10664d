//! HTML rendering for the home, results, and scene pages.
//!
//! Each page has its own view-model struct and renderer. All rendering uses
//! [maud](https://maud.lambda.xyz/), so every dynamic value is escaped unless
//! it is explicitly wrapped in `PreEscaped`. Only corpus text (scene bodies
//! and search headlines) is ever passed through raw; the search query echo
//! is always escaped.

pub mod components;
pub mod home;
pub mod results;
pub mod scene;

use axum::http::{HeaderName, HeaderValue, header};

pub use home::HomePage;
pub use results::ResultsPage;
pub use scene::ScenePage;

/// Content type and security headers sent with every HTML page.
pub fn html_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        ),
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(components::CSP_HEADER),
        ),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
    ]
}
