//! Signed preview cookie handling.
//!
//! The cookie value is `{ref}.{hex(sha256(secret || "." || ref))}`. A value
//! whose digest does not verify is treated as no preview session at all.

use axum::http::{header, HeaderMap};
use sha2::{Digest, Sha256};

use sl_core::PreviewSession;

pub const PREVIEW_COOKIE: &str = "sl_preview";

fn signature(secret: &str, value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b".");
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn seal(secret: &str, session: &PreviewSession) -> String {
    format!("{}.{}", session.r#ref, signature(secret, &session.r#ref))
}

pub fn unseal(secret: &str, value: &str) -> Option<PreviewSession> {
    // The digest is hex, so the last dot always separates ref from digest
    // even when the ref itself contains dots.
    let (r#ref, digest) = value.rsplit_once('.')?;
    if digest != signature(secret, r#ref) {
        return None;
    }
    Some(PreviewSession {
        r#ref: r#ref.to_string(),
    })
}

/// `Set-Cookie` value establishing a preview session. Session-scoped: no
/// Max-Age, so closing the browser ends the preview.
pub fn set_cookie_header(secret: &str, session: &PreviewSession) -> String {
    format!(
        "{PREVIEW_COOKIE}={}; HttpOnly; Path=/; SameSite=Lax",
        seal(secret, session)
    )
}

/// `Set-Cookie` value that drops the preview session.
pub fn clear_cookie_header() -> String {
    format!("{PREVIEW_COOKIE}=; Max-Age=0; HttpOnly; Path=/; SameSite=Lax")
}

/// Extract and verify the preview session from a request's `Cookie` header.
pub fn session_from_headers(headers: &HeaderMap, secret: &str) -> Option<PreviewSession> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == PREVIEW_COOKIE)
        .and_then(|(_, value)| unseal(secret, value))
}
