//! Shared helpers for the HTTP integration tests: a fixture-backed app
//! and request/body utilities.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use sl_cms::FixtureStore;
use sl_core::{ContentSection, Post, ResolvedPreview, RichTextBlock};
use sl_web::{create_app, AppState, SiteConfig};

pub const PREVIEW_SECRET: &str = "test-secret";
pub const VALID_TOKEN: &str = "valid-preview-token";

pub fn post(n: u32) -> Post {
    Post {
        id: format!("X{n}"),
        uid: format!("post-{n}"),
        first_publication_date: Some(Utc.with_ymd_and_hms(2021, 3, n, 10, 0, 0).unwrap()),
        last_publication_date: None,
        title: format!("Post {n}"),
        subtitle: "About things".to_string(),
        author: "Ada".to_string(),
        banner_url: "https://images.example.com/banner.png".to_string(),
        content: vec![ContentSection {
            heading: "Heading".to_string(),
            body: vec![RichTextBlock {
                text: "Some body text".to_string(),
            }],
        }],
    }
}

pub fn seeded_store() -> FixtureStore {
    FixtureStore::new(vec![post(1), post(2), post(3)]).with_preview_token(
        VALID_TOKEN,
        ResolvedPreview {
            doc_type: "posts".to_string(),
            uid: "post-1".to_string(),
        },
    )
}

pub fn test_config() -> SiteConfig {
    SiteConfig {
        page_size: 2,
        comments_repo: "starlog/starlog".to_string(),
        preview_secret: PREVIEW_SECRET.to_string(),
    }
}

pub fn build_app(store: FixtureStore) -> Router {
    create_app(AppState::new(Arc::new(store), test_config()))
}

pub fn seeded_app() -> Router {
    build_app(seeded_store())
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
