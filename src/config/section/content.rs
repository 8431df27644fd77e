//! `[content]` section configuration.
//!
//! Locations of the content that gets loaded at startup. All paths are
//! relative to the config file's directory and are normalized to absolute
//! paths during config loading.
//!
//! # Example
//!
//! ```toml
//! [content]
//! blog = "blog"
//! talks = "talks"
//! gallery = "gallery"
//! resume = "static/resume/resume.md"
//! signalboost = "signalboost.toml"
//! static = "static"
//! css = "css"
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Content source locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory of blog posts.
    pub blog: PathBuf,

    /// Directory of talk writeups.
    pub talks: PathBuf,

    /// Directory of gallery entries.
    pub gallery: PathBuf,

    /// Markdown file rendered on the resume page.
    pub resume: PathBuf,

    /// Roster of people to boost, TOML. Optional; the page is empty
    /// when the file does not exist.
    pub signalboost: PathBuf,

    /// Directory served under `/static/`.
    #[serde(rename = "static")]
    pub static_dir: PathBuf,

    /// Directory served under `/css/`.
    #[serde(rename = "css")]
    pub css_dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            blog: PathBuf::from("blog"),
            talks: PathBuf::from("talks"),
            gallery: PathBuf::from("gallery"),
            resume: PathBuf::from("static/resume/resume.md"),
            signalboost: PathBuf::from("signalboost.toml"),
            static_dir: PathBuf::from("static"),
            css_dir: PathBuf::from("css"),
        }
    }
}

impl ContentConfig {
    /// Validate raw paths before normalization.
    ///
    /// Paths must be relative so the project stays relocatable; absolute
    /// paths cannot be detected after normalization, hence the early check.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        let fields: [(&'static str, &PathBuf); 7] = [
            ("content.blog", &self.blog),
            ("content.talks", &self.talks),
            ("content.gallery", &self.gallery),
            ("content.resume", &self.resume),
            ("content.signalboost", &self.signalboost),
            ("content.static", &self.static_dir),
            ("content.css", &self.css_dir),
        ];
        for (field, path) in fields {
            if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("path must be relative, got `{}`", path.display()),
                    "paths are resolved against the config file's directory",
                );
            }
        }
    }

    /// Normalize all paths to absolute, relative to the project root.
    ///
    /// `~` expands to the home directory before resolution.
    pub fn normalize(&mut self, root: &std::path::Path) {
        for path in [
            &mut self.blog,
            &mut self.talks,
            &mut self.gallery,
            &mut self.resume,
            &mut self.signalboost,
            &mut self.static_dir,
            &mut self.css_dir,
        ] {
            *path = expand_path(path, root);
        }
    }
}

/// Expand tilde, resolve against root if relative, normalize to absolute.
fn expand_path(path: &std::path::Path, root: &std::path::Path) -> PathBuf {
    let expanded = shellexpand::tilde(path.to_str().unwrap_or_default()).into_owned();
    let path = PathBuf::from(expanded);
    let full_path = if path.is_relative() {
        root.join(&path)
    } else {
        path
    };
    crate::utils::path::normalize_path(&full_path)
}
