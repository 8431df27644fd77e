//! The in-memory post collection.

use rustc_hash::FxHashSet;

use super::post::Post;

/// An ordered collection of posts, newest first.
///
/// Built once at startup and never mutated afterwards. The sort is stable:
/// posts sharing a date keep the order they were loaded in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Posts(Vec<Post>);

impl Posts {
    /// Wrap loaded posts and sort them newest first.
    pub fn new(mut posts: Vec<Post>) -> Self {
        // Stable by contract: equal dates keep load order
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Self(posts)
    }

    /// Merge collections into one, newest first.
    ///
    /// The result length is the sum of the input lengths; ties between
    /// collections resolve in argument order.
    pub fn merge<I>(collections: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut all = Vec::new();
        for posts in collections {
            all.extend(posts.0);
        }
        Self::new(all)
    }

    /// Look up a post by its site-relative link.
    pub fn by_link(&self, link: &str) -> Option<&Post> {
        self.0.iter().find(|p| p.link == link)
    }

    /// Posts belonging to the given series, newest first.
    pub fn with_series<'a>(&'a self, series: &str) -> Vec<&'a Post> {
        self.0
            .iter()
            .filter(|p| p.series.as_deref() == Some(series))
            .collect()
    }

    /// Distinct series names in first-appearance order.
    ///
    /// Posts without a series do not contribute; the empty string never
    /// appears.
    pub fn series(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut result = Vec::new();
        for post in &self.0 {
            if let Some(series) = post.series.as_deref()
                && !series.is_empty()
                && seen.insert(series)
            {
                result.push(series.to_string());
            }
        }
        result
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Posts {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Posts {
    type Item = Post;
    type IntoIter = std::vec::IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::post::test_post;
    use crate::utils::date::DateTimeUtc;

    fn ymd(y: u16, m: u8, d: u8) -> DateTimeUtc {
        DateTimeUtc::from_ymd(y, m, d)
    }

    #[test]
    fn test_sorted_newest_first() {
        let posts = Posts::new(vec![
            test_post("blog/old", ymd(2020, 1, 1)),
            test_post("blog/new", ymd(2024, 1, 1)),
            test_post("blog/mid", ymd(2022, 6, 1)),
        ]);

        let links: Vec<&str> = posts.iter().map(|p| p.link.as_str()).collect();
        assert_eq!(links, ["blog/new", "blog/mid", "blog/old"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let date = ymd(2024, 1, 1);
        let posts = Posts::new(vec![
            test_post("blog/first", date),
            test_post("blog/second", date),
            test_post("blog/third", date),
        ]);

        let links: Vec<&str> = posts.iter().map(|p| p.link.as_str()).collect();
        assert_eq!(links, ["blog/first", "blog/second", "blog/third"]);
    }

    #[test]
    fn test_merge_length_and_order() {
        let blog = Posts::new(vec![
            test_post("blog/b1", ymd(2024, 3, 1)),
            test_post("blog/b2", ymd(2024, 1, 1)),
        ]);
        let talks = Posts::new(vec![test_post("talks/t1", ymd(2024, 2, 1))]);
        let gallery = Posts::new(vec![test_post("gallery/g1", ymd(2024, 4, 1))]);

        let merged = Posts::merge([blog, talks, gallery]);
        assert_eq!(merged.len(), 4);

        let links: Vec<&str> = merged.iter().map(|p| p.link.as_str()).collect();
        assert_eq!(links, ["gallery/g1", "blog/b1", "talks/t1", "blog/b2"]);
    }

    #[test]
    fn test_merge_ties_resolve_in_argument_order() {
        let date = ymd(2024, 1, 1);
        let blog = Posts::new(vec![test_post("blog/a", date)]);
        let talks = Posts::new(vec![test_post("talks/a", date)]);

        let merged = Posts::merge([blog, talks]);
        let links: Vec<&str> = merged.iter().map(|p| p.link.as_str()).collect();
        assert_eq!(links, ["blog/a", "talks/a"]);
    }

    #[test]
    fn test_by_link() {
        let posts = Posts::new(vec![
            test_post("blog/here", ymd(2024, 1, 1)),
            test_post("blog/there", ymd(2024, 1, 2)),
        ]);

        assert_eq!(posts.by_link("blog/here").map(|p| &*p.link), Some("blog/here"));
        assert!(posts.by_link("blog/nowhere").is_none());
    }

    #[test]
    fn test_series_dedup_and_skip_empty() {
        let mut a = test_post("blog/a", ymd(2024, 4, 1));
        a.series = Some("rust".into());
        let mut b = test_post("blog/b", ymd(2024, 3, 1));
        b.series = Some("nix".into());
        let mut c = test_post("blog/c", ymd(2024, 2, 1));
        c.series = Some("rust".into());
        let d = test_post("blog/d", ymd(2024, 1, 1));
        let mut e = test_post("blog/e", ymd(2023, 1, 1));
        e.series = Some(String::new());

        let posts = Posts::new(vec![a, b, c, d, e]);
        assert_eq!(posts.series(), vec!["rust".to_string(), "nix".to_string()]);
    }

    #[test]
    fn test_with_series() {
        let mut a = test_post("blog/a", ymd(2024, 1, 1));
        a.series = Some("rust".into());
        let mut b = test_post("blog/b", ymd(2024, 2, 1));
        b.series = Some("rust".into());
        let c = test_post("blog/c", ymd(2024, 3, 1));

        let posts = Posts::new(vec![a, b, c]);
        let series: Vec<&str> = posts
            .with_series("rust")
            .iter()
            .map(|p| p.link.as_str())
            .collect();
        assert_eq!(series, ["blog/b", "blog/a"]);
        assert!(posts.with_series("go").is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let posts = Posts::default();
        assert!(posts.is_empty());
        assert_eq!(posts.len(), 0);
        assert!(posts.series().is_empty());
    }
}
