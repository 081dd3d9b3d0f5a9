use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod comments;
pub mod config;
pub mod cookies;
pub mod error;
pub mod handlers;
pub mod render;
pub mod state;

pub use config::SiteConfig;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/post/:slug", get(handlers::post))
        .route("/api/posts", get(handlers::posts_page))
        .route("/api/preview", get(handlers::preview))
        .route("/api/exit-preview", get(handlers::exit_preview))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use sl_core::{ContentStore, Error, Result};

    pub use crate::state::AppState;
    pub use crate::SiteConfig;
}
