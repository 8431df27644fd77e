//! HTTP server for the prepared site.

mod lifecycle;
mod path;
mod response;
mod router;

pub use lifecycle::setup_shutdown_handler;

use crate::site::Site;
use crate::{debug, log};
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tiny_http::{Request, Server};

/// Bind the server and answer requests until Ctrl+C.
pub fn serve(site: Site) -> Result<()> {
    let (server, addr) =
        lifecycle::bind_with_retry(site.config.serve.interface, site.config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    let site = Arc::new(site);
    run_request_loop(&server, &site);
    Ok(())
}

fn run_request_loop(server: &Server, site: &Arc<Site>) {
    // Use thread pool to handle requests concurrently
    // This prevents slow clients from blocking other requests
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let site = Arc::clone(site);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &site) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, site: &Site) -> Result<()> {
    // Early exit if shutdown requested
    if lifecycle::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let started = Instant::now();
    let method = request.method().clone();
    let url = request.url().to_string();

    let reply = router::route(site, &url)?;
    let status = reply.status;
    response::respond(request, site, reply)?;

    debug!("serve"; "{} {} {} {}ms", method, url, status, started.elapsed().as_millis());
    Ok(())
}
