//! Content loading error types.
//!
//! All of these are fatal at startup: a site with unreadable or
//! half-parsed content must not begin serving traffic.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from parsing a single file's front matter.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("no front matter block found")]
    Missing,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid date `{0}` (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ)")]
    InvalidDate(String),

    #[error("invalid TOML front matter")]
    Toml(#[from] toml::de::Error),
}

/// Errors from loading a content directory.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("content directory `{0}` is unreadable")]
    DirUnreadable(PathBuf, #[source] std::io::Error),

    #[error("failed to read `{0}`")]
    FileUnreadable(PathBuf, #[source] std::io::Error),

    #[error("`{path}`: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("duplicate link `{link}`: `{path}` collides with an earlier file")]
    DuplicateLink { path: PathBuf, link: String },
}
