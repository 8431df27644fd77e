//! JSON Feed v1 generation.
//!
//! <https://jsonfeed.org/version/1>

use anyhow::Result;
use serde::Serialize;

use super::non_empty;
use crate::config::SiteConfig;
use crate::content::Posts;

const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1";

#[derive(Debug, Serialize)]
struct JsonFeed {
    version: String,
    title: String,
    home_page_url: String,
    feed_url: String,
    description: String,
    user_comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    favicon: Option<String>,
    author: JsonAuthor,
    items: Vec<JsonItem>,
}

#[derive(Debug, Serialize)]
struct JsonAuthor {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonItem {
    id: String,
    url: String,
    title: String,
    date_published: String,
    content_html: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

/// Build the JSON Feed document for the merged post list.
pub fn build_json(config: &SiteConfig, posts: &Posts) -> Result<String> {
    let base_url = config.site.base_url();
    let icon = non_empty(&config.site.icon);

    let items: Vec<JsonItem> = posts
        .iter()
        .map(|post| {
            let link = post.permalink(base_url);
            JsonItem {
                id: link.clone(),
                url: link,
                title: post.title.clone(),
                date_published: post.date.to_rfc3339(),
                content_html: post.body_html.clone(),
                tags: post.tags.clone(),
            }
        })
        .collect();

    let feed = JsonFeed {
        version: JSON_FEED_VERSION.to_string(),
        title: config.site.title.clone(),
        home_page_url: base_url.to_string(),
        feed_url: format!("{base_url}/blog.json"),
        description: config.site.description.clone(),
        user_comment: format!(
            "This is a JSON feed of my blogposts. For more information read: {JSON_FEED_VERSION}"
        ),
        icon: icon.clone(),
        favicon: icon.clone(),
        author: JsonAuthor {
            name: config.site.author.clone(),
            avatar: icon,
        },
        items,
    };

    Ok(serde_json::to_string_pretty(&feed)?)
}
