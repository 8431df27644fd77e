//! Sitemap generation.
//!
//! Builds the sitemap.xml document served at `/sitemap.xml`, listing the
//! static routes plus every post across all content areas.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/hello</loc>
//!     <lastmod>2024-01-01</lastmod>
//!     <changefreq>monthly</changefreq>
//!   </url>
//! </urlset>
//! ```

use crate::config::SiteConfig;
use crate::content::Posts;
use crate::utils::date::DateTimeUtc;
use crate::utils::html::escape;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// The static pages predate the sitemap, so their lastmod is pinned to an
/// arbitrary fixed date rather than the build time. Keeps the document
/// byte-stable across restarts.
const STATIC_LAST_MOD: DateTimeUtc = DateTimeUtc::from_ymd(2020, 5, 21);

/// Advisory re-crawl interval for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

struct UrlEntry {
    loc: String,
    lastmod: String,
    changefreq: ChangeFreq,
}

/// Build the sitemap document from the merged post list.
///
/// Static routes come first, then one entry per post in merged order.
pub fn build_sitemap(config: &SiteConfig, everything: &Posts) -> String {
    let base_url = config.site.base_url();

    let mut urls: Vec<UrlEntry> = Vec::with_capacity(5 + everything.len());

    let statics = [
        ("/resume", ChangeFreq::Monthly),
        ("/contact", ChangeFreq::Monthly),
        ("/", ChangeFreq::Monthly),
        ("/signalboost", ChangeFreq::Weekly),
        ("/blog", ChangeFreq::Weekly),
    ];
    for (route, changefreq) in statics {
        urls.push(UrlEntry {
            loc: format!("{base_url}{route}"),
            lastmod: STATIC_LAST_MOD.to_ymd(),
            changefreq,
        });
    }

    for post in everything {
        urls.push(UrlEntry {
            loc: post.permalink(base_url),
            lastmod: post.date.to_ymd(),
            changefreq: ChangeFreq::Monthly,
        });
    }

    into_xml(urls)
}

fn into_xml(urls: Vec<UrlEntry>) -> String {
    let mut xml = String::with_capacity(256 + urls.len() * 128);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in urls {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape(&entry.loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&entry.lastmod);
        xml.push_str("</lastmod>\n    <changefreq>");
        xml.push_str(entry.changefreq.as_str());
        xml.push_str("</changefreq>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
