//! Server-side HTML rendering. Markup is deliberately plain; the pages
//! carry small inline scripts for the client-side behaviors (incremental
//! pagination, preview exit, comment widget bootstrap).

use chrono::{DateTime, Utc};

use sl_core::{PageCursor, Post, PostSummary};

use crate::comments;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_default()
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n\
         <header><a href=\"/\">starlog</a></header>\n{body}</body>\n</html>\n",
        escape_html(title),
    )
}

// Disables the button synchronously before the fetch is awaited, so
// repeated clicks cannot start overlapping loads. Results are appended in
// response order; the button goes away once the list is exhausted.
const LOAD_MORE_SCRIPT: &str = r#"<script>
const button = document.getElementById('load-more');
if (button) {
  button.addEventListener('click', async () => {
    button.disabled = true;
    const response = await fetch('/api/posts?cursor=' + encodeURIComponent(button.dataset.cursor));
    const page = await response.json();
    const list = document.getElementById('post-list');
    for (const post of page.results) {
      const item = document.createElement('li');
      const link = document.createElement('a');
      link.href = '/post/' + post.uid;
      const title = document.createElement('h2');
      title.textContent = post.title;
      const subtitle = document.createElement('p');
      subtitle.textContent = post.subtitle;
      const author = document.createElement('span');
      author.textContent = post.author;
      link.append(title, subtitle, author);
      item.appendChild(link);
      list.appendChild(item);
    }
    if (page.next_page) {
      button.dataset.cursor = page.next_page;
      button.disabled = false;
    } else {
      button.remove();
    }
  });
}
</script>
"#;

const EXIT_PREVIEW_CONTROL: &str = r#"<a id="exit-preview" href="/api/exit-preview">Exit preview</a>
<script>
document.getElementById('exit-preview').addEventListener('click', async (event) => {
  event.preventDefault();
  const response = await fetch('/api/exit-preview');
  if (response.redirected) {
    window.location.href = response.url;
  }
});
</script>
"#;

fn post_card(post: &PostSummary) -> String {
    format!(
        "<li><article><a href=\"/post/{}\"><h2>{}</h2><p>{}</p>\
         <time>{}</time> <span>{}</span></a></article></li>\n",
        escape_html(&post.uid),
        escape_html(&post.title),
        escape_html(&post.subtitle),
        format_date(post.first_publication_date),
        escape_html(&post.author),
    )
}

pub fn listing_page(posts: &[PostSummary], next_page: Option<&PageCursor>) -> String {
    let mut body = String::from("<main>\n<ul id=\"post-list\">\n");
    for post in posts {
        body.push_str(&post_card(post));
    }
    body.push_str("</ul>\n");
    if let Some(cursor) = next_page {
        body.push_str(&format!(
            "<button id=\"load-more\" type=\"button\" data-cursor=\"{}\">Load more posts</button>\n",
            escape_html(cursor.as_str()),
        ));
        body.push_str(LOAD_MORE_SCRIPT);
    }
    body.push_str("</main>\n");
    page("starlog", &body)
}

pub fn article_page(
    post: &Post,
    reading_minutes: usize,
    previous: Option<&PostSummary>,
    next: Option<&PostSummary>,
    preview_active: bool,
    comments_repo: &str,
) -> String {
    let mut body = String::new();

    if !post.banner_url.is_empty() {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"\">\n",
            escape_html(&post.banner_url)
        ));
    }

    body.push_str("<main>\n");
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&post.title)));
    body.push_str(&format!(
        "<p><time>{}</time> <span>{}</span> <span>{} min</span></p>\n",
        format_date(post.first_publication_date),
        escape_html(&post.author),
        reading_minutes,
    ));
    if let Some(edited) = post.last_publication_date {
        body.push_str(&format!(
            "<p><em>Edited <time>{}</time></em></p>\n",
            format_date(Some(edited)),
        ));
    }

    for section in &post.content {
        body.push_str(&format!(
            "<section>\n<h2>{}</h2>\n",
            escape_html(&section.heading)
        ));
        for block in &section.body {
            body.push_str(&format!("<p>{}</p>\n", escape_html(&block.text)));
        }
        body.push_str("</section>\n");
    }

    if previous.is_some() || next.is_some() {
        body.push_str("<nav>\n");
        if let Some(previous) = previous {
            body.push_str(&format!(
                "<a rel=\"prev\" href=\"/post/{}\"><span>{}</span> <strong>Previous post</strong></a>\n",
                escape_html(&previous.uid),
                escape_html(&previous.title),
            ));
        }
        if let Some(next) = next {
            body.push_str(&format!(
                "<a rel=\"next\" href=\"/post/{}\"><span>{}</span> <strong>Next post</strong></a>\n",
                escape_html(&next.uid),
                escape_html(&next.title),
            ));
        }
        body.push_str("</nav>\n");
    }

    body.push_str(&comments::comments_section(comments_repo));
    if preview_active {
        body.push_str(EXIT_PREVIEW_CONTROL);
    }
    body.push_str("</main>\n");

    page(&post.title, &body)
}

/// Auto-redirect page returned by preview activation. Uses both a meta
/// refresh and a script redirect; relying on the redirect status alone
/// runs into Chrome's redirect caching (crbug 696204).
pub fn preview_redirect_page(target: &str) -> String {
    let target = escape_html(target);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n\
         <meta http-equiv=\"Refresh\" content=\"0; url={target}\">\n\
         <script>window.location.href = '{target}'</script>\n\
         </head>\n</html>\n",
    )
}

pub fn not_found_page() -> String {
    page(
        "Post not found",
        "<main>\n<h1>Post not found</h1>\n<p><a href=\"/\">Back to all posts</a></p>\n</main>\n",
    )
}
