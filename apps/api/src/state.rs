use std::sync::Arc;

use crate::config::Config;
use crate::storage::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence for history and proof records. The analysis pipeline never sees it.
    pub store: Arc<dyn KeyValueStore>,
    pub config: Config,
}
