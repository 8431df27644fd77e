//! Page content builders.
//!
//! Each function returns a complete HTML document: inner markup built here,
//! wrapped in the shared shell. Post bodies and the resume arrive as
//! pre-rendered HTML and are inserted verbatim; everything else is escaped.

use super::shell::wrap;
use crate::config::SiteConfig;
use crate::content::{Post, Posts};
use crate::site::Person;
use crate::utils::html::{escape, escape_attr};

/// Posts shown on the front page.
const HOME_POST_COUNT: usize = 5;

pub fn home(config: &SiteConfig, posts: &Posts) -> String {
    let mut content = String::new();
    content.push_str("<section>\n<p>");
    content.push_str(&escape(&config.site.description));
    content.push_str("</p>\n</section>\n<section>\n<h2>Recent posts</h2>\n");
    content.push_str(&post_list(posts.iter().take(HOME_POST_COUNT)));
    content.push_str("</section>\n");

    wrap(config, "", &content)
}

pub fn post_index(config: &SiteConfig, heading: &str, posts: &Posts) -> String {
    let mut content = String::new();
    content.push_str("<h2>");
    content.push_str(&escape(heading));
    content.push_str("</h2>\n");
    content.push_str(&post_list(posts));

    wrap(config, heading, &content)
}

pub fn post_detail(config: &SiteConfig, post: &Post) -> String {
    let mut content = String::new();
    content.push_str("<article>\n<h2>");
    content.push_str(&escape(&post.title));
    content.push_str("</h2>\n<p><time datetime=\"");
    content.push_str(&post.date.to_rfc3339());
    content.push_str("\">");
    content.push_str(&post.date.to_ymd());
    content.push_str("</time></p>\n");

    if let Some(series) = &post.series {
        content.push_str("<p>Part of the <a href=\"/blog/series/");
        content.push_str(&escape_attr(series));
        content.push_str("\">");
        content.push_str(&escape(series));
        content.push_str("</a> series</p>\n");
    }

    content.push_str(&post.body_html);

    if !post.tags.is_empty() {
        content.push_str("\n<p>Tags: ");
        for (i, tag) in post.tags.iter().enumerate() {
            if i > 0 {
                content.push_str(", ");
            }
            content.push_str(&escape(tag));
        }
        content.push_str("</p>\n");
    }

    content.push_str("</article>\n");

    wrap(config, &post.title, &content)
}

pub fn series_index(config: &SiteConfig, series: &[String]) -> String {
    let mut content = String::from("<h2>Series</h2>\n<ul>\n");
    for name in series {
        content.push_str("<li><a href=\"/blog/series/");
        content.push_str(&escape_attr(name));
        content.push_str("\">");
        content.push_str(&escape(name));
        content.push_str("</a></li>\n");
    }
    content.push_str("</ul>\n");

    wrap(config, "Series", &content)
}

pub fn series_posts(config: &SiteConfig, name: &str, posts: &[&Post]) -> String {
    let mut content = String::new();
    content.push_str("<h2>Series: ");
    content.push_str(&escape(name));
    content.push_str("</h2>\n<ul>\n");
    for post in posts {
        content.push_str(&post_list_item(post));
    }
    content.push_str("</ul>\n");

    let heading = format!("Series: {name}");
    wrap(config, &heading, &content)
}

pub fn contact(config: &SiteConfig) -> String {
    let mut content = String::from("<h2>Contact</h2>\n");
    if !config.site.email.is_empty() {
        content.push_str("<p>Email: <a href=\"mailto:");
        content.push_str(&escape_attr(&config.site.email));
        content.push_str("\">");
        content.push_str(&escape(&config.site.email));
        content.push_str("</a></p>\n");
    }

    wrap(config, "Contact", &content)
}

pub fn feeds(config: &SiteConfig) -> String {
    let content = "<h2>Feeds</h2>\n<ul>\n\
         <li><a href=\"/blog.rss\">RSS</a></li>\n\
         <li><a href=\"/blog.atom\">Atom</a></li>\n\
         <li><a href=\"/blog.json\">JSON Feed</a></li>\n\
         </ul>\n";

    wrap(config, "Feeds", content)
}

pub fn signal_boost(config: &SiteConfig, people: &[Person]) -> String {
    let mut content = String::from(
        "<h2>Signal boost</h2>\n<p>People looking for their next role.</p>\n",
    );
    for person in people {
        content.push_str("<section>\n<h3>");
        content.push_str(&escape(&person.name));
        content.push_str("</h3>\n");

        if !person.tags.is_empty() {
            content.push_str("<p>");
            for (i, tag) in person.tags.iter().enumerate() {
                if i > 0 {
                    content.push_str(", ");
                }
                content.push_str(&escape(tag));
            }
            content.push_str("</p>\n");
        }

        if !person.links.is_empty() {
            content.push_str("<p>");
            for (i, (label, url)) in person.links.iter().enumerate() {
                if i > 0 {
                    content.push_str(" &middot; ");
                }
                content.push_str("<a href=\"");
                content.push_str(&escape_attr(url));
                content.push_str("\">");
                content.push_str(&escape(label));
                content.push_str("</a>");
            }
            content.push_str("</p>\n");
        }

        content.push_str("</section>\n");
    }

    wrap(config, "Signal boost", &content)
}

pub fn resume(config: &SiteConfig, resume_html: &str) -> String {
    let content = format!("<article>\n{resume_html}\n</article>\n");
    wrap(config, "Resume", &content)
}

pub fn not_found(config: &SiteConfig, path: &str) -> String {
    let mut content = String::from("<h2>Not found</h2>\n<p>can't find ");
    content.push_str(&escape(path));
    content.push_str("</p>\n");

    wrap(config, "Not found", &content)
}

fn post_list<'a>(posts: impl IntoIterator<Item = &'a Post>) -> String {
    let mut html = String::from("<ul>\n");
    for post in posts {
        html.push_str(&post_list_item(post));
    }
    html.push_str("</ul>\n");
    html
}

fn post_list_item(post: &Post) -> String {
    format!(
        "<li><a href=\"/{}\">{}</a> <time>{}</time> - {}</li>\n",
        escape_attr(&post.link),
        escape(&post.title),
        post.date.to_ymd(),
        escape(&post.summary)
    )
}
