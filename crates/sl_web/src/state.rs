use std::sync::Arc;

use sl_core::ContentStore;

use crate::config::SiteConfig;

/// Shared state available to all handlers via `State<Arc<AppState>>`.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentStore>, config: SiteConfig) -> Self {
        Self {
            content,
            config: Arc::new(config),
        }
    }
}
