//! Syndication output built once at startup.
//!
//! Generates the documents served verbatim by the feed routes:
//!
//! - **Feed**: RSS 2.0 (`/blog.rss`), Atom 1.0 (`/blog.atom`), and
//!   JSON Feed (`/blog.json`)
//! - **Sitemap**: search engine indexing (`/sitemap.xml`)
//!
//! All generators consume the merged post list, so the three feeds and
//! the sitemap always agree on content and ordering.

pub mod feed;
pub mod sitemap;
