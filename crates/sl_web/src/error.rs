use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use sl_core::Error as CoreError;

use crate::render;

/// HTTP-facing error for page and API handlers.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The requested document does not exist.
    #[error("not found")]
    NotFound,
}

pub type WebResult<T> = Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound => {
                (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
            }
            WebError::Core(CoreError::ContentFetch(detail)) => {
                tracing::error!(%detail, "content backend failure");
                (StatusCode::BAD_GATEWAY, "content backend unavailable").into_response()
            }
            WebError::Core(err) => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
