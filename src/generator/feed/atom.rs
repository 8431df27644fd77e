//! Atom 1.0 feed generation.

use anyhow::Result;
use atom_syndication::{
    Content, ContentBuilder, Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime,
    GeneratorBuilder, Link, LinkBuilder, Person, PersonBuilder, Text,
};

use super::{last_updated, non_empty};
use crate::config::SiteConfig;
use crate::content::{Post, Posts};
use crate::utils::date::DateTimeUtc;

/// Build the Atom 1.0 document for the merged post list.
pub fn build_atom(config: &SiteConfig, posts: &Posts) -> Result<String> {
    let base_url = config.site.base_url();

    let entries: Vec<Entry> = posts
        .iter()
        .map(|post| post_to_atom_entry(post, base_url))
        .collect();

    let author: Person = PersonBuilder::default()
        .name(config.site.author.clone())
        .email(non_empty(&config.site.email))
        .build();

    let self_link: Link = LinkBuilder::default()
        .href(format!("{base_url}/blog.atom"))
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(base_url.to_string())
        .rel("alternate".to_string())
        .build();

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(config.site.title.clone()))
        .id(base_url)
        .updated(fixed_datetime(last_updated(posts)))
        .authors(vec![author])
        .links(vec![self_link, alternate_link])
        .subtitle(Some(Text::plain(config.site.description.clone())))
        .rights(non_empty(&config.site.copyright).map(Text::plain))
        .generator(Some(
            GeneratorBuilder::default().value("homestead").build(),
        ))
        .lang(non_empty(&config.site.language))
        .entries(entries)
        .build();

    Ok(feed.to_string())
}

fn post_to_atom_entry(post: &Post, base_url: &str) -> Entry {
    let link = post.permalink(base_url);

    let entry_link: Link = LinkBuilder::default()
        .href(&link)
        .rel("alternate".to_string())
        .build();

    let content: Content = ContentBuilder::default()
        .value(Some(post.body_html.clone()))
        .content_type(Some("html".to_string()))
        .build();

    EntryBuilder::default()
        .title(Text::plain(post.title.clone()))
        .id(&link)
        .updated(fixed_datetime(post.date))
        .links(vec![entry_link])
        .summary(Some(Text::plain(post.summary.clone())))
        .content(Some(content))
        .build()
}

fn fixed_datetime(date: DateTimeUtc) -> FixedDateTime {
    date.to_rfc3339()
        .parse()
        .unwrap_or_else(|_| FixedDateTime::default())
}
