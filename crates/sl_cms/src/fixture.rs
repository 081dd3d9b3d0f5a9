//! In-memory [`ContentStore`] used by tests and local development.
//!
//! Implements the same paging contract as the HTTP client: exact page
//! sizes, stable ordering, append-only continuation cursors. Cursors are
//! synthetic `type|order|offset|size` strings; they only need to round-trip
//! through [`ContentStore::next_page`].

use std::collections::HashMap;

use async_trait::async_trait;

use sl_core::store::DEFAULT_PAGE_SIZE;
use sl_core::{
    ContentStore, Error, PageCursor, PageResponse, Post, QueryOptions, ResolvedPreview, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Seeded,
    PubDateAsc,
    PubDateDesc,
}

impl SortOrder {
    fn from_expression(expr: Option<&str>) -> Self {
        match expr {
            None => Self::Seeded,
            Some(expr) if expr.trim_end().ends_with(" desc") => Self::PubDateDesc,
            Some(_) => Self::PubDateAsc,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Seeded => "seeded",
            Self::PubDateAsc => "asc",
            Self::PubDateDesc => "desc",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "seeded" => Some(Self::Seeded),
            "asc" => Some(Self::PubDateAsc),
            "desc" => Some(Self::PubDateDesc),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct FixtureStore {
    posts: Vec<Post>,
    drafts: HashMap<String, Post>,
    tokens: HashMap<String, ResolvedPreview>,
}

impl FixtureStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    /// Register a valid preview token and the document it points at.
    pub fn with_preview_token(mut self, token: impl Into<String>, resolved: ResolvedPreview) -> Self {
        self.tokens.insert(token.into(), resolved);
        self
    }

    /// Register a draft revision served instead of published content
    /// whenever a preview ref is supplied.
    pub fn with_draft(mut self, post: Post) -> Self {
        self.drafts.insert(post.uid.clone(), post);
        self
    }

    fn ordered(&self, order: SortOrder) -> Vec<Post> {
        let mut posts = self.posts.clone();
        match order {
            SortOrder::Seeded => {}
            SortOrder::PubDateAsc => {
                posts.sort_by(|a, b| a.first_publication_date.cmp(&b.first_publication_date));
            }
            SortOrder::PubDateDesc => {
                posts.sort_by(|a, b| b.first_publication_date.cmp(&a.first_publication_date));
            }
        }
        posts
    }

    fn page(&self, order: SortOrder, offset: usize, page_size: usize) -> PageResponse {
        let posts = self.ordered(order);
        let results: Vec<Post> = posts.iter().skip(offset).take(page_size).cloned().collect();
        let consumed = offset + results.len();
        let next_page = (consumed < posts.len()).then(|| {
            PageCursor::new(format!("posts|{}|{consumed}|{page_size}", order.token()))
        });
        PageResponse { results, next_page }
    }
}

#[async_trait]
impl ContentStore for FixtureStore {
    async fn query(&self, document_type: &str, options: &QueryOptions) -> Result<PageResponse> {
        if document_type != "posts" {
            return Ok(PageResponse {
                results: vec![],
                next_page: None,
            });
        }

        let order = SortOrder::from_expression(options.orderings.as_deref());
        let page_size = options.page_size.unwrap_or(DEFAULT_PAGE_SIZE) as usize;

        let offset = match &options.after {
            None => 0,
            Some(after) => {
                let posts = self.ordered(order);
                match posts.iter().position(|p| &p.id == after) {
                    Some(position) => position + 1,
                    // Unknown anchor: nothing comes after it.
                    None => posts.len(),
                }
            }
        };

        Ok(self.page(order, offset, page_size))
    }

    async fn next_page(&self, cursor: &PageCursor) -> Result<PageResponse> {
        let bad_cursor = || Error::ContentFetch(format!("unrecognized cursor: {cursor}"));

        let parts: Vec<&str> = cursor.as_str().split('|').collect();
        let [doc_type, order, offset, page_size] = parts.as_slice() else {
            return Err(bad_cursor());
        };
        if *doc_type != "posts" {
            return Err(bad_cursor());
        }
        let order = SortOrder::from_token(order.as_ref()).ok_or_else(bad_cursor)?;
        let offset: usize = offset.parse().map_err(|_| bad_cursor())?;
        let page_size: usize = page_size.parse().map_err(|_| bad_cursor())?;

        Ok(self.page(order, offset, page_size))
    }

    async fn get_by_uid(
        &self,
        document_type: &str,
        uid: &str,
        preview_ref: Option<&str>,
    ) -> Result<Option<Post>> {
        if document_type != "posts" {
            return Ok(None);
        }
        if preview_ref.is_some() {
            if let Some(draft) = self.drafts.get(uid) {
                return Ok(Some(draft.clone()));
            }
        }
        Ok(self.posts.iter().find(|p| p.uid == uid).cloned())
    }

    async fn resolve_preview(
        &self,
        token: &str,
        _document_id: &str,
    ) -> Result<Option<ResolvedPreview>> {
        Ok(self.tokens.get(token).cloned())
    }
}
