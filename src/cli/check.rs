//! Content check command.
//!
//! By the time this runs, `Site::build` has already loaded every content
//! area and pre-built the syndication documents, so a failing site never
//! reaches this point. The command only reports what was found.

use anyhow::Result;

use crate::log;
use crate::site::Site;

/// Print a summary of the loaded site.
pub fn run(site: &Site) -> Result<()> {
    if !site.series.is_empty() {
        log!("check"; "{} series: {}", site.series.len(), site.series.join(", "));
    }

    log!(
        "check";
        "feeds: rss {} bytes, atom {} bytes, json {} bytes, sitemap {} bytes",
        site.rss.len(),
        site.atom.len(),
        site.json_feed.len(),
        site.sitemap.len()
    );
    log!("check"; "content ok");

    Ok(())
}
