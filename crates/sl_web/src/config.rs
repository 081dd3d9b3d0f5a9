use sl_core::{Error, Result};

/// Posts rendered on the first listing page and per "load more" fetch.
pub const DEFAULT_LISTING_PAGE_SIZE: u32 = 2;

const DEV_PREVIEW_SECRET: &str = "starlog-dev-secret";

/// Site configuration loaded from environment variables, with defaults
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Listing page size (`LISTING_PAGE_SIZE`).
    pub page_size: u32,
    /// GitHub repository backing the comment widget (`COMMENTS_REPO`).
    pub comments_repo: String,
    /// Key used to sign the preview cookie (`PREVIEW_SECRET`).
    pub preview_secret: String,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let page_size = match std::env::var("LISTING_PAGE_SIZE") {
            Ok(raw) => raw.parse().map_err(|_| {
                Error::Config(format!("LISTING_PAGE_SIZE must be a number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_LISTING_PAGE_SIZE,
        };

        let comments_repo =
            std::env::var("COMMENTS_REPO").unwrap_or_else(|_| "starlog/starlog".to_string());

        let preview_secret = match std::env::var("PREVIEW_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!("PREVIEW_SECRET not set, using the development key");
                DEV_PREVIEW_SECRET.to_string()
            }
        };

        Ok(Self {
            page_size,
            comments_repo,
            preview_secret,
        })
    }
}
