use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use sl_core::store::{ORDER_PUB_DATE_ASC, ORDER_PUB_DATE_DESC};
use sl_core::{links, text, PageCursor, PostSummary, PreviewSession, QueryOptions};

use crate::cookies;
use crate::error::{WebError, WebResult};
use crate::render;
use crate::state::AppState;

const POSTS_TYPE: &str = "posts";

/// Listing page: first page of post summaries plus the continuation cursor,
/// server-rendered; further pages load through [`posts_page`].
pub async fn home(State(state): State<Arc<AppState>>) -> WebResult<Html<String>> {
    let page = state
        .content
        .query(
            POSTS_TYPE,
            &QueryOptions::new().page_size(state.config.page_size),
        )
        .await?;

    let summaries: Vec<PostSummary> = page.results.iter().map(PostSummary::from).collect();
    Ok(Html(render::listing_page(
        &summaries,
        page.next_page.as_ref(),
    )))
}

#[derive(Debug, Deserialize)]
pub struct PostsPageParams {
    pub cursor: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostFeedPage {
    pub results: Vec<PostSummary>,
    pub next_page: Option<PageCursor>,
}

/// JSON pagination endpoint backing the listing page's "load more" action.
/// Without a cursor it mirrors the first page's query.
pub async fn posts_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PostsPageParams>,
) -> WebResult<Json<PostFeedPage>> {
    let page = match params.cursor {
        Some(cursor) => state.content.next_page(&PageCursor::new(cursor)).await?,
        None => {
            state
                .content
                .query(
                    POSTS_TYPE,
                    &QueryOptions::new().page_size(state.config.page_size),
                )
                .await?
        }
    };

    Ok(Json(PostFeedPage {
        results: page.results.into_iter().map(PostSummary::from).collect(),
        next_page: page.next_page,
    }))
}

/// Article page. Honors the preview cookie's revision ref, resolves the
/// chronological neighbors, and computes the reading-time estimate.
pub async fn post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> WebResult<Html<String>> {
    let session = cookies::session_from_headers(&headers, &state.config.preview_secret);
    let preview_ref = session.as_ref().map(|s| s.r#ref.as_str());

    let post = state
        .content
        .get_by_uid(POSTS_TYPE, &slug, preview_ref)
        .await?
        .ok_or(WebError::NotFound)?;

    // Both neighbor queries run concurrently; the page renders only once
    // both have settled.
    let previous_options = QueryOptions::new()
        .page_size(1)
        .after(post.id.as_str())
        .orderings(ORDER_PUB_DATE_ASC);
    let next_options = QueryOptions::new()
        .page_size(1)
        .after(post.id.as_str())
        .orderings(ORDER_PUB_DATE_DESC);
    let (previous, next) = tokio::join!(
        state.content.query(POSTS_TYPE, &previous_options),
        state.content.query(POSTS_TYPE, &next_options),
    );
    let previous = previous?.results.into_iter().next().map(PostSummary::from);
    let next = next?.results.into_iter().next().map(PostSummary::from);

    let minutes = text::reading_time_minutes(&post.content);

    Ok(Html(render::article_page(
        &post,
        minutes,
        previous.as_ref(),
        next.as_ref(),
        session.is_some(),
        &state.config.comments_repo,
    )))
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub token: String,
    #[serde(rename = "documentId")]
    pub document_id: String,
}

/// Preview activation: validates the token, sets the signed preview cookie
/// and returns an HTML page that redirects into the site.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PreviewParams>,
) -> WebResult<Response> {
    let resolved = state
        .content
        .resolve_preview(&params.token, &params.document_id)
        .await?;

    let Some(resolved) = resolved else {
        tracing::debug!(token = %params.token, "preview activation rejected");
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid token" })),
        )
            .into_response());
    };

    let target = links::preview_target(&resolved);
    let session = PreviewSession {
        r#ref: params.token,
    };
    let cookie = cookies::set_cookie_header(&state.config.preview_secret, &session);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Html(render::preview_redirect_page(&target)),
    )
        .into_response())
}

/// Drops the preview session and sends the browser back to the published site.
pub async fn exit_preview() -> Response {
    (
        [(header::SET_COOKIE, cookies::clear_cookie_header())],
        Redirect::to("/"),
    )
        .into_response()
}
