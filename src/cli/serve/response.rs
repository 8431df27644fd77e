//! HTTP response handlers.

use anyhow::Result;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::site::Site;
use crate::utils::mime::types::{HTML, PLAIN};

/// Note for people who read response headers, sent on every response.
const HACKER_NOTE: &str =
    "If you are reading this, check out /signalboost to find people for your team";

/// A fully prepared response.
///
/// Routing produces a `Reply` and only `respond` touches the socket,
/// which keeps the route table testable without a bound server.
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type,
            body: body.into(),
        }
    }

    pub fn html(body: String) -> Self {
        Self::ok(HTML, body)
    }

    pub fn not_found(body: String) -> Self {
        Self {
            status: 404,
            content_type: HTML,
            body: body.into_bytes(),
        }
    }
}

/// Send a reply with the site headers attached.
pub fn respond(request: Request, site: &Site, reply: Reply) -> Result<()> {
    if is_head_request(&request) {
        let mut response = Response::empty(StatusCode(reply.status))
            .with_header(make_header("Content-Type", reply.content_type));
        for header in site_headers(site) {
            response = response.with_header(header);
        }
        request.respond(response)?;
        return Ok(());
    }

    let mut response = Response::from_data(reply.body)
        .with_status_code(StatusCode(reply.status))
        .with_header(make_header("Content-Type", reply.content_type));
    for header in site_headers(site) {
        response = response.with_header(header);
    }
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    let response = Response::from_data(b"503 Service Unavailable".to_vec())
        .with_status_code(StatusCode(503))
        .with_header(make_header("Content-Type", PLAIN));
    request.respond(response)?;
    Ok(())
}

/// Headers carried on every page and document response.
fn site_headers(site: &Site) -> Vec<Header> {
    let mut headers = vec![make_header("X-Hacker", HACKER_NOTE)];

    if let Some(clacks) = site.config.serve.clacks_header()
        && let Ok(header) = Header::from_bytes("X-Clacks-Overhead", clacks.as_bytes())
    {
        headers.push(header);
    }
    if let Some(rev) = &site.git_rev
        && let Ok(header) = Header::from_bytes("X-Git-Rev", rev.as_bytes())
    {
        headers.push(header);
    }

    headers
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
