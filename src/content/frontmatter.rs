//! Front matter detection and parsing.
//!
//! Two formats are accepted, chosen by the delimiter:
//!
//! ```text
//! ---                          +++
//! title: Hello                 title = "Hello"
//! date: 2024-01-01             date = "2024-01-01"
//! tags: a, b                   tags = ["a", "b"]
//! ---                          +++
//! ```
//!
//! The `---` form is a simple `key: value` format, not full YAML. The `+++`
//! form is TOML. Both produce the same strongly typed [`FrontMatter`]:
//! required fields are checked here, at load time, so later stages never
//! see a half-valid post.

use serde::Deserialize;

use super::error::FrontMatterError;
use crate::utils::date::DateTimeUtc;

/// Validated front matter of one content file.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub date: DateTimeUtc,
    pub summary: String,
    pub series: Option<String>,
    pub tags: Vec<String>,
}

/// Raw front matter as written by the author, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontMatter {
    title: Option<String>,
    date: Option<String>,
    summary: Option<String>,
    series: Option<String>,
    tags: Vec<String>,
}

impl RawFrontMatter {
    /// Check required fields and parse the date.
    fn validate(self) -> Result<FrontMatter, FrontMatterError> {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .ok_or(FrontMatterError::MissingField("title"))?;
        let date = self.date.ok_or(FrontMatterError::MissingField("date"))?;
        let date =
            DateTimeUtc::parse(&date).ok_or_else(|| FrontMatterError::InvalidDate(date.clone()))?;

        Ok(FrontMatter {
            title,
            date,
            summary: self.summary.unwrap_or_default(),
            series: self.series.filter(|s| !s.is_empty()),
            tags: self.tags,
        })
    }
}

/// Extract and validate front matter, returning it with the markdown body.
pub fn parse(content: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let (fm, body, is_toml) = detect(content).ok_or(FrontMatterError::Missing)?;

    let raw = if is_toml {
        toml::from_str(fm)?
    } else {
        parse_simple(fm)
    };

    Ok((raw.validate()?, body))
}

/// Detect and split off front matter.
/// Returns `(front matter, body, is_toml)` if found.
fn detect(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    // Simple: ---...---
    if trimmed.starts_with("---")
        && let Some(end) = trimmed[3..].find("\n---")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, false));
    }

    // TOML: +++...+++
    if trimmed.starts_with("+++")
        && let Some(end) = trimmed[3..].find("\n+++")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, true));
    }

    None
}

/// Parse the simple `key: value` format.
///
/// Unknown keys are ignored so authors can keep editor metadata around.
fn parse_simple(content: &str) -> RawFrontMatter {
    let mut raw = RawFrontMatter::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let value = value.trim();
            match key.trim().to_lowercase().as_str() {
                "title" => raw.title = Some(value.to_string()),
                "date" => raw.date = Some(value.to_string()),
                "summary" => raw.summary = Some(value.to_string()),
                "series" => raw.series = Some(value.to_string()),
                "tags" => {
                    raw.tags = value
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                }
                _ => {}
            }
        }
    }

    raw
}
