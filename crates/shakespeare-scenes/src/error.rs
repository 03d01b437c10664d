//! Error types for the page handlers.
//!
//! Errors are rendered as simple HTML error pages. Client-facing text never
//! names the failing parameter or the underlying database error; those go to
//! the log instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, PreEscaped, html};

use crate::params::ValidationError;
use crate::query::StoreError;

/// Page handler error type.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The request parameters failed validation.
    #[error("invalid request: {0}")]
    Invalid(#[from] ValidationError),

    /// The requested work or scene does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The store failed to answer.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PageError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, message) = match &self {
            Self::Invalid(err) => {
                tracing::warn!(error = %err, "rejected request parameters");
                ("Not Found", "There is no such page in the folio.")
            }
            Self::NotFound(what) => {
                tracing::info!(what = %what, "lookup found nothing");
                ("Not Found", "There is no such page in the folio.")
            }
            Self::Store(err) => {
                tracing::error!(error = %err, "store error");
                (
                    "Service Unavailable",
                    "The library is temporarily closed. Please try again later.",
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to search" }
                    }
                }
            }
        };

        (status, crate::render::html_headers(), markup).into_response()
    }
}
