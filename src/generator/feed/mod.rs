//! Feed generation (RSS, Atom, JSON Feed).
//!
//! All three feeds are views over the same merged post list:
//!
//! - **RSS 2.0**: `/blog.rss`
//! - **Atom 1.0**: `/blog.atom`
//! - **JSON Feed v1**: `/blog.json`

mod atom;
mod json;
mod rss;

pub use atom::build_atom;
pub use json::build_json;
pub use rss::build_rss;

use crate::content::Posts;
use crate::utils::date::DateTimeUtc;

/// Feed-level timestamp: the newest post date, or the epoch when the site
/// has no posts. Derived from content rather than boot time so restarts
/// do not churn feed readers.
fn last_updated(posts: &Posts) -> DateTimeUtc {
    posts
        .iter()
        .map(|p| p.date)
        .max()
        .unwrap_or(DateTimeUtc::from_ymd(1970, 1, 1))
}

/// Treat empty config strings as absent for optional feed fields.
fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_post;

    #[test]
    fn test_last_updated_is_newest_date() {
        let posts = Posts::new(vec![
            test_post("blog/a", DateTimeUtc::from_ymd(2023, 5, 1)),
            test_post("blog/b", DateTimeUtc::from_ymd(2024, 2, 9)),
        ]);
        assert_eq!(last_updated(&posts), DateTimeUtc::from_ymd(2024, 2, 9));
    }

    #[test]
    fn test_last_updated_empty_falls_back_to_epoch() {
        assert_eq!(
            last_updated(&Posts::default()).to_rfc3339(),
            "1970-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("x"), Some("x".to_string()));
    }
}
