//! Loads a directory of markdown posts into memory.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

use super::error::LoadError;
use super::frontmatter;
use super::post::Post;
use super::store::Posts;
use crate::debug;
use crate::markdown::MarkdownRenderer;

/// Read every markdown file in `dir` into a sorted collection.
///
/// `label` is the content area the directory belongs to ("blog", "talks",
/// "gallery") and becomes the link prefix: a file `dir/hello.md` yields the
/// link `blog/hello`.
///
/// The load is fail fast. One malformed file aborts the whole collection so
/// a broken deploy never serves a partial site.
pub fn load_posts(
    dir: &Path,
    label: &str,
    renderer: &dyn MarkdownRenderer,
) -> Result<Posts, LoadError> {
    let entries =
        fs::read_dir(dir).map_err(|e| LoadError::DirUnreadable(dir.to_path_buf(), e))?;

    // Deterministic load order so equal-date posts sort stably
    let mut paths: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_markdown(path))
        .collect();
    paths.sort();

    let mut posts = Vec::with_capacity(paths.len());
    let mut seen_links = FxHashSet::default();

    for path in paths {
        let raw = fs::read_to_string(&path)
            .map_err(|e| LoadError::FileUnreadable(path.clone(), e))?;

        let (matter, body) = frontmatter::parse(&raw).map_err(|source| LoadError::FrontMatter {
            path: path.clone(),
            source,
        })?;

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let link = format!("{label}/{stem}");

        // Catches e.g. hello.md next to hello.markdown
        if !seen_links.insert(link.clone()) {
            return Err(LoadError::DuplicateLink { path, link });
        }

        debug!(label; "loaded {} ({})", link, matter.date.to_ymd());

        posts.push(Post {
            title: matter.title,
            link,
            summary: matter.summary,
            body_html: renderer.render(body),
            date: matter.date,
            series: matter.series,
            tags: matter.tags,
        });
    }

    Ok(Posts::new(posts))
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md" | "markdown")
    )
}
