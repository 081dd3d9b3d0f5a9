//! Markup for the third-party comment widget.
//!
//! The widget is a remote script element appended under a fixed anchor
//! node. The bootstrap removes the anchor's first child before appending,
//! so revisiting a page never stacks a second widget instance.

use crate::render::escape_html;

pub const COMMENTS_ANCHOR_ID: &str = "comments";

const WIDGET_SCRIPT_URL: &str = "https://utteranc.es/client.js";
const ISSUE_TERM: &str = "pathname";
const LABEL: &str = "comment :speech_balloon:";
const THEME: &str = "photon-dark";

const BOOTSTRAP: &str = r#"<script>
(function () {
  const anchor = document.getElementById('comments');
  if (!anchor) return;
  if (anchor.firstChild) {
    anchor.removeChild(anchor.firstChild);
  }
  const script = document.createElement('script');
  script.src = anchor.dataset.src;
  script.async = true;
  script.setAttribute('repo', anchor.dataset.repo);
  script.setAttribute('issue-term', anchor.dataset.issueTerm);
  script.setAttribute('label', anchor.dataset.label);
  script.setAttribute('theme', anchor.dataset.theme);
  script.setAttribute('crossorigin', 'anonymous');
  anchor.appendChild(script);
})();
</script>
"#;

/// Anchor node plus the widget bootstrap. `repo` is the only configurable
/// piece; everything else is fixed.
pub fn comments_section(repo: &str) -> String {
    format!(
        "<section id=\"{COMMENTS_ANCHOR_ID}\" data-src=\"{WIDGET_SCRIPT_URL}\" \
         data-repo=\"{}\" data-issue-term=\"{ISSUE_TERM}\" data-label=\"{}\" \
         data-theme=\"{THEME}\"></section>\n{BOOTSTRAP}",
        escape_html(repo),
        escape_html(LABEL),
    )
}
