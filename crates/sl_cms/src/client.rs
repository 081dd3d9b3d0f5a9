//! HTTP client for the headless content API.
//!
//! Wire contract, JSON over HTTP:
//!
//! - `GET {base}/api/documents?type=..&page_size=..[&after=..][&orderings=..][&ref=..]`
//!   returns `{ "results": [Post], "next_page": url | null }`
//! - `GET {base}/api/documents/{type}/{uid}[?ref=..]` returns a `Post`, 404 if absent
//! - `GET {base}/api/preview/resolve?token=..&documentId=..` returns
//!   `{ "type": .., "uid": .. }`, non-2xx if the token is invalid
//!
//! `next_page` is a complete URL minted by the backend; it is handed back to
//! callers as an opaque cursor and followed verbatim. Every call is a single
//! round trip with no retry.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use sl_core::store::DEFAULT_PAGE_SIZE;
use sl_core::{
    ContentStore, Error, PageCursor, PageResponse, Post, QueryOptions, ResolvedPreview, Result,
};

pub struct CmsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CmsClient {
    /// `base_url` is the origin of the content API, e.g. `https://cms.example.com`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self { http, base_url })
    }

    fn search_url(&self, document_type: &str, options: &QueryOptions) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("/api/documents");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("type", document_type);
            query.append_pair(
                "page_size",
                &options.page_size.unwrap_or(DEFAULT_PAGE_SIZE).to_string(),
            );
            if let Some(after) = &options.after {
                query.append_pair("after", after);
            }
            if let Some(orderings) = &options.orderings {
                query.append_pair("orderings", orderings);
            }
            if let Some(r#ref) = &options.preview_ref {
                query.append_pair("ref", r#ref);
            }
        }
        url
    }

    fn document_url(&self, document_type: &str, uid: &str, preview_ref: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/api/documents/{document_type}/{uid}"));
        if let Some(r#ref) = preview_ref {
            url.query_pairs_mut().append_pair("ref", r#ref);
        }
        url
    }

    fn resolve_url(&self, token: &str, document_id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("/api/preview/resolve");
        url.query_pairs_mut()
            .append_pair("token", token)
            .append_pair("documentId", document_id);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "content api request");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::ContentFetch(format!("{url} returned {status}")));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ContentStore for CmsClient {
    async fn query(&self, document_type: &str, options: &QueryOptions) -> Result<PageResponse> {
        self.get_json(self.search_url(document_type, options)).await
    }

    async fn next_page(&self, cursor: &PageCursor) -> Result<PageResponse> {
        let url = Url::parse(cursor.as_str())
            .map_err(|e| Error::InvalidUrl(format!("{cursor}: {e}")))?;
        self.get_json(url).await
    }

    async fn get_by_uid(
        &self,
        document_type: &str,
        uid: &str,
        preview_ref: Option<&str>,
    ) -> Result<Option<Post>> {
        let url = self.document_url(document_type, uid, preview_ref);
        tracing::debug!(%url, "content api request");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::ContentFetch(format!("{url} returned {status}")));
        }
        Ok(Some(response.json::<Post>().await?))
    }

    async fn resolve_preview(
        &self,
        token: &str,
        document_id: &str,
    ) -> Result<Option<ResolvedPreview>> {
        let url = self.resolve_url(token, document_id);
        tracing::debug!(%url, "preview token resolution");
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        Ok(Some(response.json::<ResolvedPreview>().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::store::ORDER_PUB_DATE_DESC;
    use std::collections::HashMap;

    fn client() -> CmsClient {
        CmsClient::new("https://cms.example.com").unwrap()
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_url_requests_exact_page_size() {
        let url = client().search_url("posts", &QueryOptions::new().page_size(2));
        let query = query_map(&url);

        assert_eq!(url.path(), "/api/documents");
        assert_eq!(query["type"], "posts");
        assert_eq!(query["page_size"], "2");
        assert!(!query.contains_key("after"));
        assert!(!query.contains_key("ref"));
    }

    #[test]
    fn test_search_url_defaults_page_size() {
        let url = client().search_url("posts", &QueryOptions::new());
        assert_eq!(query_map(&url)["page_size"], DEFAULT_PAGE_SIZE.to_string());
    }

    #[test]
    fn test_search_url_neighbor_lookup() {
        let options = QueryOptions::new()
            .page_size(1)
            .after("X1")
            .orderings(ORDER_PUB_DATE_DESC);
        let url = client().search_url("posts", &options);
        let query = query_map(&url);

        assert_eq!(query["page_size"], "1");
        assert_eq!(query["after"], "X1");
        assert_eq!(query["orderings"], ORDER_PUB_DATE_DESC);
    }

    #[test]
    fn test_document_url_carries_preview_ref() {
        let url = client().document_url("posts", "my-post", Some("draft-ref"));
        assert_eq!(url.path(), "/api/documents/posts/my-post");
        assert_eq!(query_map(&url)["ref"], "draft-ref");
    }

    #[test]
    fn test_resolve_url_parameters() {
        let url = client().resolve_url("tok", "X1");
        let query = query_map(&url);
        assert_eq!(url.path(), "/api/preview/resolve");
        assert_eq!(query["token"], "tok");
        assert_eq!(query["documentId"], "X1");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(CmsClient::new("not a url").is_err());
    }

    #[test]
    fn test_page_response_parses_backend_order() {
        let body = r#"{
            "results": [
                {
                    "id": "X2", "uid": "second", "title": "Second", "subtitle": "",
                    "author": "Ada", "banner_url": "",
                    "first_publication_date": "2021-03-02T10:00:00Z",
                    "last_publication_date": null,
                    "content": []
                },
                {
                    "id": "X1", "uid": "first", "title": "First", "subtitle": "",
                    "author": "Ada", "banner_url": "",
                    "first_publication_date": "2021-03-01T10:00:00Z",
                    "last_publication_date": null,
                    "content": []
                }
            ],
            "next_page": "https://cms.example.com/api/documents?type=posts&page=2"
        }"#;

        let page: PageResponse = serde_json::from_str(body).unwrap();
        let uids: Vec<_> = page.results.iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, vec!["second", "first"]);
        assert!(page.next_page.is_some());
    }

    #[test]
    fn test_page_response_null_next_page() {
        let page: PageResponse =
            serde_json::from_str(r#"{"results": [], "next_page": null}"#).unwrap();
        assert!(page.next_page.is_none());
    }
}
