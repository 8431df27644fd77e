//! Signal boost roster.
//!
//! A TOML file of people looking for work, served at `/signalboost`:
//!
//! ```toml
//! [[person]]
//! name = "Ashe Connor"
//! tags = ["rust", "sre"]
//!
//! [person.links]
//! github = "https://github.com/kivikakk"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One person on the signal boost page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Person {
    pub name: String,
    /// Skills or topics, rendered as badges.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Label to URL. `BTreeMap` keeps render order stable.
    #[serde(default)]
    pub links: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct PeopleFile {
    #[serde(default, rename = "person")]
    people: Vec<Person>,
}

/// Load the roster, or an empty one when the file does not exist.
///
/// A present but malformed file is an error: silently dropping people from
/// the page would defeat its purpose.
pub fn load_people(path: &Path) -> Result<Vec<Person>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: PeopleFile = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(file.people)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_people() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("signalboost.toml");
        fs::write(
            &path,
            r#"
[[person]]
name = "Ashe Connor"
tags = ["rust", "sre"]

[person.links]
github = "https://github.com/kivikakk"
website = "https://kivikakk.ee"

[[person]]
name = "Sam Example"
"#,
        )
        .unwrap();

        let people = load_people(&path).unwrap();
        assert_eq!(people.len(), 2);

        assert_eq!(people[0].name, "Ashe Connor");
        assert_eq!(people[0].tags, ["rust", "sre"]);
        assert_eq!(
            people[0].links.get("github").map(String::as_str),
            Some("https://github.com/kivikakk")
        );

        assert_eq!(people[1].name, "Sam Example");
        assert!(people[1].tags.is_empty());
        assert!(people[1].links.is_empty());
    }

    #[test]
    fn test_missing_file_is_empty_roster() {
        let dir = TempDir::new().unwrap();
        let people = load_people(&dir.path().join("nope.toml")).unwrap();
        assert!(people.is_empty());
    }

    #[test]
    fn test_empty_file_is_empty_roster() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("signalboost.toml");
        fs::write(&path, "").unwrap();

        assert!(load_people(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("signalboost.toml");
        fs::write(&path, "[[person]]\nname = 42\n").unwrap();

        assert!(load_people(&path).is_err());
    }

    #[test]
    fn test_links_iterate_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("signalboost.toml");
        fs::write(
            &path,
            r#"
[[person]]
name = "A"

[person.links]
zulip = "https://z.example.com"
github = "https://g.example.com"
"#,
        )
        .unwrap();

        let people = load_people(&path).unwrap();
        let labels: Vec<&str> = people[0].links.keys().map(String::as_str).collect();
        assert_eq!(labels, ["github", "zulip"]);
    }
}
