//! Integration tests for the preview activation flow, the preview cookie
//! and the exit endpoint.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, body_string, build_app, get, get_with_cookie, post, seeded_app, seeded_store, PREVIEW_SECRET, VALID_TOKEN};
use sl_core::PreviewSession;
use sl_web::cookies;

#[tokio::test]
async fn invalid_token_is_rejected_without_cookie() {
    let app = seeded_app();
    let response = get(app, "/api/preview?token=bogus&documentId=X1").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(
        response.headers().get(header::SET_COOKIE).is_none(),
        "a rejected activation must not establish a session"
    );

    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "message": "Invalid token" }));
}

#[tokio::test]
async fn valid_token_sets_cookie_and_redirects_to_post() {
    let uri = format!("/api/preview?token={VALID_TOKEN}&documentId=X1");
    let response = get(seeded_app(), &uri).await;

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("activation must set the preview cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with(&format!("{}=", cookies::PREVIEW_COOKIE)));
    assert!(cookie.contains("HttpOnly"));

    let html = body_string(response).await;
    assert!(html.contains("url=/post/post-1"), "meta refresh must target the post");
    assert!(
        html.contains("window.location.href = '/post/post-1'"),
        "script redirect must target the same path"
    );
}

#[tokio::test]
async fn preview_cookie_serves_draft_content() {
    let mut draft = post(1);
    draft.title = "Draft title".to_string();
    let app = build_app(seeded_store().with_draft(draft));

    let session = PreviewSession {
        r#ref: VALID_TOKEN.to_string(),
    };
    let cookie = format!(
        "{}={}",
        cookies::PREVIEW_COOKIE,
        cookies::seal(PREVIEW_SECRET, &session)
    );
    let html = body_string(get_with_cookie(app, "/post/post-1", &cookie).await).await;

    assert!(html.contains("Draft title"));
    assert!(html.contains("id=\"exit-preview\""));
}

#[tokio::test]
async fn tampered_cookie_falls_back_to_published_content() {
    let mut draft = post(1);
    draft.title = "Draft title".to_string();
    let app = build_app(seeded_store().with_draft(draft));

    let cookie = format!("{}={}.deadbeef", cookies::PREVIEW_COOKIE, VALID_TOKEN);
    let html = body_string(get_with_cookie(app, "/post/post-1", &cookie).await).await;

    assert!(html.contains("<h1>Post 1</h1>"));
    assert!(!html.contains("Draft title"));
    assert!(!html.contains("exit-preview"));
}

#[tokio::test]
async fn exit_preview_clears_cookie_and_redirects_home() {
    let response = get(seeded_app(), "/api/exit-preview").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("exit must drop the preview cookie")
        .to_str()
        .unwrap();
    assert!(cookie.contains("Max-Age=0"));
}
