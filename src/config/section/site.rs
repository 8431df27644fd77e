//! `[site]` section configuration.
//!
//! Site identity used by page templates, feeds and the sitemap.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Annie Doe's Blog"
//! author = "Annie Doe"
//! email = "annie@example.com"
//! description = "My blog posts and rants about various technology things."
//! url = "https://example.com"
//! copyright = "This work is copyright Annie Doe."
//! icon = "https://example.com/static/img/avatar.png"
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Site metadata for page rendering and feed generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Author email. Optional; feeds omit the author element when empty.
    pub email: String,

    /// Site description.
    pub description: String,

    /// Canonical base URL (e.g., "https://example.com"), no trailing slash.
    pub url: String,

    /// Language code (e.g., "en", "de").
    pub language: String,

    /// Copyright notice.
    pub copyright: String,

    /// Absolute URL of the site icon, used by the JSON feed and as avatar.
    pub icon: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            email: String::new(),
            description: String::new(),
            url: String::new(),
            language: "en".into(),
            copyright: String::new(),
            icon: String::new(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title`, `author` and `url` are required (feeds cannot be built
    ///   without them)
    /// - `url` must parse as http(s) with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error("site.title", "site.title must not be empty");
        }
        if self.author.is_empty() {
            diag.error("site.author", "site.author must not be empty");
        }

        if self.url.is_empty() {
            diag.error_with_hint(
                "site.url",
                "site.url is not configured",
                "set site.url, e.g.: \"https://example.com\"",
            );
            return;
        }

        // URL format check using url crate for strict validation
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        "site.url",
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        "site.url",
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    "site.url",
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
