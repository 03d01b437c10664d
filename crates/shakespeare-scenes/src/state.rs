//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::query::SceneStore;

/// Shared application state available to all request handlers.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Query gateway for works, scenes, and search.
    pub store: Arc<dyn SceneStore>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration and a store.
    pub fn new(config: Config, store: Arc<dyn SceneStore>) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
