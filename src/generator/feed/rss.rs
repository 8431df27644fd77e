//! RSS 2.0 feed generation.

use anyhow::{Result, anyhow};
use rss::validation::Validate;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};

use super::{last_updated, non_empty};
use crate::config::SiteConfig;
use crate::content::{Post, Posts};

/// Build the RSS 2.0 document for the merged post list.
///
/// Items appear in merged order (newest first). Each item carries the post
/// summary as its description and the rendered body as `content:encoded`.
pub fn build_rss(config: &SiteConfig, posts: &Posts) -> Result<String> {
    let base_url = config.site.base_url();

    let items: Vec<rss::Item> = posts
        .iter()
        .map(|post| post_to_rss_item(post, base_url))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&config.site.title)
        .link(format!("{base_url}/blog"))
        .description(&config.site.description)
        .language(non_empty(&config.site.language))
        .copyright(non_empty(&config.site.copyright))
        .managing_editor(channel_editor(config))
        .pub_date(last_updated(posts).to_rfc2822())
        .generator("homestead".to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("rss validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn post_to_rss_item(post: &Post, base_url: &str) -> rss::Item {
    let link = post.permalink(base_url);

    ItemBuilder::default()
        .title(post.title.clone())
        .link(link.clone())
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.summary.clone())
        .pub_date(post.date.to_rfc2822())
        .content(post.body_html.clone())
        .build()
}

/// RSS wants "email (Name)" for people fields. Omitted when the config has
/// no email.
fn channel_editor(config: &SiteConfig) -> Option<String> {
    let email = non_empty(&config.site.email)?;
    match non_empty(&config.site.author) {
        Some(author) => Some(format!("{email} ({author})")),
        None => Some(email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_post;
    use crate::utils::date::DateTimeUtc;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.title = "Test Blog".to_string();
        config.site.author = "Test Author".to_string();
        config.site.email = "test@example.com".to_string();
        config.site.description = "A test blog".to_string();
        config.site.url = "https://example.com".to_string();
        config
    }

    fn two_posts() -> Posts {
        Posts::new(vec![
            test_post("blog/a", DateTimeUtc::from_ymd(2023, 1, 1)),
            test_post("blog/b", DateTimeUtc::from_ymd(2023, 6, 1)),
        ])
    }

    #[test]
    fn test_channel_metadata() {
        let xml = build_rss(&make_config(), &Posts::default()).unwrap();

        assert!(xml.contains("<title>Test Blog</title>"));
        assert!(xml.contains("<link>https://example.com/blog</link>"));
        assert!(xml.contains("<description>A test blog</description>"));
        assert!(xml.contains("<managingEditor>test@example.com (Test Author)</managingEditor>"));
    }

    #[test]
    fn test_items_newest_first() {
        let xml = build_rss(&make_config(), &two_posts()).unwrap();

        assert_eq!(xml.matches("<item>").count(), 2);
        let b_at = xml.find("blog/b").unwrap();
        let a_at = xml.find("blog/a").unwrap();
        assert!(b_at < a_at, "newer post should come first");
    }

    #[test]
    fn test_item_link_is_base_plus_post_link() {
        let xml = build_rss(&make_config(), &two_posts()).unwrap();
        assert!(xml.contains("<link>https://example.com/blog/a</link>"));
        assert!(xml.contains("<link>https://example.com/blog/b</link>"));
    }

    #[test]
    fn test_item_carries_summary_and_date() {
        let posts = Posts::new(vec![test_post(
            "blog/dated",
            DateTimeUtc::new(2024, 6, 15, 14, 30, 45),
        )]);
        let xml = build_rss(&make_config(), &posts).unwrap();

        assert!(xml.contains("a summary"));
        assert!(xml.contains("Sat, 15 Jun 2024 14:30:45 GMT"));
    }

    #[test]
    fn test_guid_is_permalink() {
        let posts = Posts::new(vec![test_post("blog/g", DateTimeUtc::from_ymd(2024, 1, 1))]);
        let xml = build_rss(&make_config(), &posts).unwrap();

        // isPermaLink="true" is the RSS default and may be omitted on write
        let has_guid = xml
            .contains(r#"<guid isPermaLink="true">https://example.com/blog/g</guid>"#)
            || xml.contains("<guid>https://example.com/blog/g</guid>");
        assert!(has_guid);
    }

    #[test]
    fn test_editor_omitted_without_email() {
        let mut config = make_config();
        config.site.email = String::new();

        let xml = build_rss(&config, &Posts::default()).unwrap();
        assert!(!xml.contains("managingEditor"));
    }

    #[test]
    fn test_deterministic_output() {
        let config = make_config();
        let posts = two_posts();

        assert_eq!(
            build_rss(&config, &posts).unwrap(),
            build_rss(&config, &posts).unwrap()
        );
    }
}
