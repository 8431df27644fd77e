//! The immutable site state.
//!
//! `Site::build` runs once at startup: it loads every content area, renders
//! the resume, reads the signal boost roster, and pre-builds the feed and
//! sitemap documents. If any step fails the process must not start serving.
//! After a successful build nothing here is ever mutated, so request
//! handlers share the state without locks.

mod people;

pub use people::{Person, load_people};

use std::fs;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::content::{Posts, load_posts};
use crate::generator::feed::{build_atom, build_json, build_rss};
use crate::generator::sitemap::build_sitemap;
use crate::log;
use crate::markdown::MarkdownRenderer;
use crate::utils::plural::plural_count;

pub struct Site {
    pub config: SiteConfig,
    pub posts: Posts,
    pub talks: Posts,
    pub gallery: Posts,
    /// Distinct blog series names, sorted alphabetically.
    pub series: Vec<String>,
    pub resume_html: String,
    pub people: Vec<Person>,
    pub rss: String,
    pub atom: String,
    pub json_feed: String,
    pub sitemap: String,
    /// Deploy revision from `GIT_REV`, echoed in the `X-Git-Rev` header.
    pub git_rev: Option<String>,
}

impl Site {
    /// Load all content and pre-build the syndication documents.
    pub fn build(config: SiteConfig, renderer: &dyn MarkdownRenderer) -> Result<Self> {
        let posts = load_posts(&config.content.blog, "blog", renderer)?;
        let talks = load_posts(&config.content.talks, "talks", renderer)?;
        let gallery = load_posts(&config.content.gallery, "gallery", renderer)?;

        log!(
            "site";
            "{}, {}, {}",
            plural_count(posts.len(), "post"),
            plural_count(talks.len(), "talk"),
            plural_count(gallery.len(), "gallery item")
        );

        let mut series = posts.series();
        series.sort_unstable();

        // Feeds and the sitemap all consume the same merged view, so they
        // can never disagree on content or ordering.
        let everything = Posts::merge([posts.clone(), talks.clone(), gallery.clone()]);

        let resume_md = fs::read_to_string(&config.content.resume)
            .with_context(|| format!("Failed to read {}", config.content.resume.display()))?;
        let resume_html = renderer.render(&resume_md);

        let people = load_people(&config.content.signalboost)?;
        if !people.is_empty() {
            log!("site"; "{} in signal boost roster", people.len());
        }

        let rss = build_rss(&config, &everything)?;
        let atom = build_atom(&config, &everything)?;
        let json_feed = build_json(&config, &everything)?;
        let sitemap = build_sitemap(&config, &everything);

        let git_rev = std::env::var("GIT_REV").ok().filter(|rev| !rev.is_empty());

        Ok(Self {
            config,
            posts,
            talks,
            gallery,
            series,
            resume_html,
            people,
            rss,
            atom,
            json_feed,
            sitemap,
            git_rev,
        })
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::site::test_site`)
// ============================================================================

/// Build a small site from a throwaway directory tree.
///
/// Returns the `TempDir` alongside the site so the static files stay
/// alive while request handling tests read them.
#[cfg(test)]
pub fn test_site() -> (tempfile::TempDir, Site) {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();

    for area in ["blog", "talks", "gallery", "css"] {
        fs::create_dir(root.join(area)).unwrap();
    }
    fs::create_dir_all(root.join("static/js")).unwrap();
    fs::create_dir_all(root.join("static/resume")).unwrap();
    fs::write(root.join("static/resume/resume.md"), "# Resume\n\nHi.\n").unwrap();
    fs::write(root.join("static/robots.txt"), "User-agent: *\n").unwrap();
    fs::write(root.join("static/js/sw.js"), "// service worker\n").unwrap();
    fs::write(root.join("css/site.css"), "body { margin: 0 }\n").unwrap();

    fs::write(
        root.join("blog/first.md"),
        "---\ntitle: First Post\ndate: 2024-01-02\nseries: maraud\nsummary: intro\n---\nHello *world*\n",
    )
    .unwrap();
    fs::write(
        root.join("talks/demo.md"),
        "---\ntitle: Demo Talk\ndate: 2024-02-03\nsummary: slides\n---\nSlides here\n",
    )
    .unwrap();

    let mut config = SiteConfig::default();
    config.site.title = "Test Site".to_string();
    config.site.author = "Test Author".to_string();
    config.site.email = "test@example.com".to_string();
    config.site.description = "a test site".to_string();
    config.site.url = "https://example.com".to_string();
    config.content.blog = root.join("blog");
    config.content.talks = root.join("talks");
    config.content.gallery = root.join("gallery");
    config.content.resume = root.join("static/resume/resume.md");
    config.content.signalboost = root.join("signalboost.toml");
    config.content.static_dir = root.join("static");
    config.content.css_dir = root.join("css");

    let site = Site::build(config, &crate::markdown::CmarkRenderer::with_all_extensions()).unwrap();
    (dir, site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::CmarkRenderer;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
        fs::write(
            dir.join(name),
            format!("---\ntitle: {title}\ndate: {date}\nsummary: about {title}\n---\nbody of {title}\n"),
        )
        .unwrap();
    }

    /// Lay out a whole site on disk and return a config pointing at it.
    fn site_fixture() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        for area in ["blog", "talks", "gallery"] {
            fs::create_dir(root.join(area)).unwrap();
        }
        fs::create_dir_all(root.join("static/resume")).unwrap();
        fs::write(root.join("static/resume/resume.md"), "# Resume\n\nHi.\n").unwrap();

        let mut config = SiteConfig::default();
        config.site.title = "Test Site".to_string();
        config.site.author = "Test Author".to_string();
        config.site.email = "test@example.com".to_string();
        config.site.description = "test".to_string();
        config.site.url = "https://example.com".to_string();
        config.content.blog = root.join("blog");
        config.content.talks = root.join("talks");
        config.content.gallery = root.join("gallery");
        config.content.resume = root.join("static/resume/resume.md");
        config.content.signalboost = root.join("signalboost.toml");

        (dir, config)
    }

    #[test]
    fn test_build_end_to_end() {
        let (dir, config) = site_fixture();
        write_post(&dir.path().join("blog"), "a.md", "A", "2023-01-01");
        write_post(&dir.path().join("blog"), "b.md", "B", "2023-06-01");

        let site = Site::build(config, &CmarkRenderer::with_all_extensions()).unwrap();

        // Merged list is newest first: B then A
        assert_eq!(site.posts.len(), 2);
        let links: Vec<&str> = site.posts.iter().map(|p| p.link.as_str()).collect();
        assert_eq!(links, ["blog/b", "blog/a"]);

        // Both feeds carry both posts in that order
        assert_eq!(site.rss.matches("<item>").count(), 2);
        let b_at = site.rss.find("blog/b").unwrap();
        let a_at = site.rss.find("blog/a").unwrap();
        assert!(b_at < a_at);

        // Sitemap has both posts plus the five static routes
        assert_eq!(site.sitemap.matches("<url>").count(), 7);

        assert!(site.resume_html.contains("<h1>Resume</h1>"));
        assert!(site.people.is_empty());
    }

    #[test]
    fn test_build_fails_on_missing_content_dir() {
        let (dir, mut config) = site_fixture();
        config.content.blog = dir.path().join("missing");

        assert!(Site::build(config, &CmarkRenderer::with_all_extensions()).is_err());
    }

    #[test]
    fn test_build_fails_on_malformed_post() {
        let (dir, config) = site_fixture();
        fs::write(dir.path().join("blog/bad.md"), "no front matter here").unwrap();

        assert!(Site::build(config, &CmarkRenderer::with_all_extensions()).is_err());
    }

    #[test]
    fn test_build_fails_on_missing_resume() {
        let (dir, mut config) = site_fixture();
        config.content.resume = dir.path().join("gone.md");

        assert!(Site::build(config, &CmarkRenderer::with_all_extensions()).is_err());
    }

    #[test]
    fn test_series_sorted_alphabetically() {
        let (dir, config) = site_fixture();
        let blog = dir.path().join("blog");
        fs::write(
            blog.join("one.md"),
            "---\ntitle: One\ndate: 2024-03-01\nseries: zulip\nsummary: s\n---\nb",
        )
        .unwrap();
        fs::write(
            blog.join("two.md"),
            "---\ntitle: Two\ndate: 2024-02-01\nseries: alpha\nsummary: s\n---\nb",
        )
        .unwrap();

        let site = Site::build(config, &CmarkRenderer::with_all_extensions()).unwrap();
        assert_eq!(site.series, ["alpha", "zulip"]);
    }

    #[test]
    fn test_talks_and_gallery_feed_into_outputs() {
        let (dir, config) = site_fixture();
        write_post(&dir.path().join("blog"), "post.md", "Post", "2024-01-01");
        write_post(&dir.path().join("talks"), "talk.md", "Talk", "2024-02-01");
        write_post(&dir.path().join("gallery"), "art.md", "Art", "2024-03-01");

        let site = Site::build(config, &CmarkRenderer::with_all_extensions()).unwrap();

        for link in ["blog/post", "talks/talk", "gallery/art"] {
            assert!(site.rss.contains(link), "rss missing {link}");
            assert!(site.json_feed.contains(link), "json feed missing {link}");
            assert!(site.sitemap.contains(link), "sitemap missing {link}");
        }
        assert_eq!(site.sitemap.matches("<url>").count(), 8);
    }

    #[test]
    fn test_signal_boost_roster_loaded() {
        let (dir, config) = site_fixture();
        fs::write(
            dir.path().join("signalboost.toml"),
            "[[person]]\nname = \"Ashe\"\ntags = [\"rust\"]\n",
        )
        .unwrap();

        let site = Site::build(config, &CmarkRenderer::with_all_extensions()).unwrap();
        assert_eq!(site.people.len(), 1);
        assert_eq!(site.people[0].name, "Ashe");
    }
}
