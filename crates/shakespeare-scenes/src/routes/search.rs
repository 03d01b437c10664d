//! Home and search results handler for `GET /`.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use crate::error::PageError;
use crate::params::{QueryPairs, SearchParams, search_query};
use crate::render::{self, HomePage, ResultsPage};
use crate::state::AppState;

/// Render the home page, or search results when `q` is non-empty.
pub async fn search_handler(
    State(state): State<AppState>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response, PageError> {
    // Repeated keys keep their first value
    let params = match params {
        Ok(Query(pairs)) => SearchParams::from_pairs(&pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable search query, showing home page");
            SearchParams::default()
        }
    };
    let site_name = state.config.site_name.as_str();

    let Some(query) = search_query(params) else {
        let markup = HomePage { site_name }.render();
        return Ok((render::html_headers(), markup).into_response());
    };

    let results = state.store.search(&query).await?;
    tracing::debug!(query = %query, hits = results.len(), "search");

    let markup = ResultsPage {
        site_name,
        query: &query,
        results: &results,
    }
    .render();

    Ok((render::html_headers(), markup).into_response())
}
