//! The core content unit.

use crate::utils::date::DateTimeUtc;

/// One piece of content: a blog post, a talk writeup or a gallery entry.
///
/// Everything derived from the source file is computed once at load time;
/// a `Post` is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Title from front matter.
    pub title: String,

    /// Site-relative link without leading slash, `<area>/<file stem>`
    /// (e.g. `blog/hello-world`).
    pub link: String,

    /// One-line summary from front matter, used on index pages and feeds.
    pub summary: String,

    /// Body converted to HTML at load time.
    pub body_html: String,

    /// Publication date from front matter.
    pub date: DateTimeUtc,

    /// Optional series this post belongs to.
    pub series: Option<String>,

    /// Free-form tags.
    pub tags: Vec<String>,
}

impl Post {
    /// Absolute URL of this post under the given base URL.
    pub fn permalink(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.link)
    }
}

/// Build a post with placeholder content (available to all test modules).
#[cfg(test)]
pub fn test_post(link: &str, date: DateTimeUtc) -> Post {
    Post {
        title: format!("Title of {link}"),
        link: link.to_string(),
        summary: "a summary".into(),
        body_html: "<p>body</p>".into(),
        date,
        series: None,
        tags: Vec::new(),
    }
}
