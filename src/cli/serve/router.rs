//! Route dispatch.
//!
//! Pages and syndication documents come straight out of the prepared
//! `Site`; only `/static/` and `/css/` touch the disk per request.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use percent_encoding::percent_decode_str;

use super::path::resolve_path;
use super::response::Reply;
use crate::content::Posts;
use crate::render;
use crate::site::Site;
use crate::utils::mime;
use crate::utils::mime::types::{ATOM, JSON, PLAIN, RSS, XML};

/// Map a request URL to its response.
pub fn route(site: &Site, url: &str) -> Result<Reply> {
    let path = url.split('?').next().unwrap_or(url);
    let config = &site.config;

    let reply = match path {
        "/" => Reply::html(render::home(config, &site.posts)),
        "/blog" => Reply::html(render::post_index(config, "Blog", &site.posts)),
        "/talks" => Reply::html(render::post_index(config, "Talks", &site.talks)),
        "/gallery" => Reply::html(render::post_index(config, "Gallery", &site.gallery)),
        "/blog/series" => Reply::html(render::series_index(config, &site.series)),
        "/contact" => Reply::html(render::contact(config)),
        "/feeds" => Reply::html(render::feeds(config)),
        "/signalboost" => Reply::html(render::signal_boost(config, &site.people)),
        "/resume" => Reply::html(render::resume(config, &site.resume_html)),
        "/blog.rss" => Reply::ok(RSS, site.rss.clone()),
        "/blog.atom" => Reply::ok(ATOM, site.atom.clone()),
        "/blog.json" => Reply::ok(JSON, site.json_feed.clone()),
        "/sitemap.xml" => Reply::ok(XML, site.sitemap.clone()),
        "/healthz" => Reply::ok(PLAIN, "OK"),
        "/robots.txt" => return serve_file(site, &config.content.static_dir, "robots.txt", path),
        "/sw.js" => return serve_file(site, &config.content.static_dir, "js/sw.js", path),
        _ => return route_prefixed(site, path),
    };
    Ok(reply)
}

/// Prefix routes, checked most-specific first.
fn route_prefixed(site: &Site, path: &str) -> Result<Reply> {
    let config = &site.config;

    if let Some(name) = path.strip_prefix("/blog/series/") {
        let name = decode(name);
        let posts = site.posts.with_series(&name);
        if posts.is_empty() {
            return Ok(not_found(site, path));
        }
        return Ok(Reply::html(render::series_posts(config, &name, &posts)));
    }

    if let Some(rest) = path.strip_prefix("/static/") {
        return serve_file(site, &config.content.static_dir, rest, path);
    }
    if let Some(rest) = path.strip_prefix("/css/") {
        return serve_file(site, &config.content.css_dir, rest, path);
    }

    let areas: [(&str, &Posts); 3] = [
        ("/blog/", &site.posts),
        ("/talks/", &site.talks),
        ("/gallery/", &site.gallery),
    ];
    for (prefix, posts) in areas {
        if path.starts_with(prefix) {
            // Links are stored without slashes at either end, e.g. "blog/first"
            let link = decode(path.trim_matches('/'));
            return Ok(match posts.by_link(&link) {
                Some(post) => Reply::html(render::post_detail(config, post)),
                None => not_found(site, path),
            });
        }
    }

    Ok(not_found(site, path))
}

/// Serve a file from one of the configured static roots.
///
/// `display` is the original URL path, used for the 404 page.
fn serve_file(site: &Site, root: &Path, rest: &str, display: &str) -> Result<Reply> {
    match resolve_path(rest, root) {
        Some(file) => {
            let body =
                fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
            Ok(Reply::ok(mime::from_path(&file), body))
        }
        None => Ok(not_found(site, display)),
    }
}

fn not_found(site: &Site, path: &str) -> Reply {
    Reply::not_found(render::not_found(&site.config, path))
}

fn decode(s: &str) -> String {
    percent_decode_str(s)
        .decode_utf8()
        .map(Cow::into_owned)
        .unwrap_or_else(|_| s.to_string())
}
