use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{PageCursor, Post};
use crate::Result;

/// Number of documents returned when no page size is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Ordering expression: first publication date, oldest first.
pub const ORDER_PUB_DATE_ASC: &str = "document.first_publication_date";

/// Ordering expression: first publication date, newest first.
pub const ORDER_PUB_DATE_DESC: &str = "document.first_publication_date desc";

/// Recognized options for a document query.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Maximum number of results per call.
    pub page_size: Option<u32>,
    /// Document id to start after, for neighbor lookups.
    pub after: Option<String>,
    /// Sort expression string, see the `ORDER_*` constants.
    pub orderings: Option<String>,
    /// Revision to query instead of published content.
    pub preview_ref: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn after(mut self, id: impl Into<String>) -> Self {
        self.after = Some(id.into());
        self
    }

    pub fn orderings(mut self, expr: impl Into<String>) -> Self {
        self.orderings = Some(expr.into());
        self
    }

    pub fn preview_ref(mut self, r#ref: impl Into<String>) -> Self {
        self.preview_ref = Some(r#ref.into());
        self
    }
}

/// One page of query results plus the continuation for the next one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    pub results: Vec<Post>,
    pub next_page: Option<PageCursor>,
}

/// The document a preview token points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPreview {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub uid: String,
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Query documents of a given type.
    async fn query(&self, document_type: &str, options: &QueryOptions) -> Result<PageResponse>;

    /// Follow an opaque continuation cursor returned by a previous query.
    async fn next_page(&self, cursor: &PageCursor) -> Result<PageResponse>;

    /// Resolve a document by unique identifier, optionally at a preview revision.
    /// `Ok(None)` means no such document.
    async fn get_by_uid(
        &self,
        document_type: &str,
        uid: &str,
        preview_ref: Option<&str>,
    ) -> Result<Option<Post>>;

    /// Validate a preview token. `Ok(None)` means the token is invalid or
    /// does not resolve to a document.
    async fn resolve_preview(
        &self,
        token: &str,
        document_id: &str,
    ) -> Result<Option<ResolvedPreview>>;
}
