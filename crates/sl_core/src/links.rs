use crate::store::ResolvedPreview;

/// Route used when a document cannot be resolved to anything better.
pub const FALLBACK_ROUTE: &str = "/";

/// Maps a document to the route that renders it. Posts get pretty URLs;
/// any other type falls back to its uid at the site root, in case new
/// document types get created.
pub fn resolve_link(doc_type: &str, uid: &str) -> String {
    if doc_type == "posts" {
        return format!("/post/{uid}");
    }
    format!("/{uid}")
}

/// Route a preview session should land on after activation.
pub fn preview_target(resolved: &ResolvedPreview) -> String {
    if resolved.uid.is_empty() {
        return FALLBACK_ROUTE.to_string();
    }
    resolve_link(&resolved.doc_type, &resolved.uid)
}
