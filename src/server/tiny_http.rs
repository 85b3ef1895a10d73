//! tiny_http server adapter
//!
//! Accepts requests one at a time on the calling thread, hands each to the
//! router and writes the reply back.

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;

use tiny_http::{Header, Request, Response, Server, StatusCode};

use super::router::{HttpReply, dispatch};
use crate::core::ports::TodoRepository;

/// A bound HTTP server over a todo repository
pub struct TodoServer {
    server: Server,
    repo: Arc<dyn TodoRepository>,
}

impl std::fmt::Debug for TodoServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoServer").field("addr", &self.local_addr()).finish_non_exhaustive()
    }
}

impl TodoServer {
    /// Bind to `addr` (e.g. `0.0.0.0:3000`; port 0 picks a free port)
    pub fn bind(addr: &str, repo: Arc<dyn TodoRepository>) -> anyhow::Result<Self> {
        let server = Server::http(addr)
            .map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;
        Ok(Self { server, repo })
    }

    /// Address the server is listening on
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until the listener shuts down
    pub fn run(&self) -> anyhow::Result<()> {
        if let Some(addr) = self.local_addr() {
            log::info!("Server running at http://localhost:{}", addr.port());
        }

        for request in self.server.incoming_requests() {
            if let Err(e) = self.handle(request) {
                log::warn!("failed to send response: {e}");
            }
        }

        Ok(())
    }

    /// Serve a single request
    fn handle(&self, mut request: Request) -> std::io::Result<()> {
        let method = request.method().clone();
        let url = request.url().to_string();
        log::info!("{method} {url}");

        let reply = dispatch(self.repo.as_ref(), &method, &url, request.as_reader());
        log::debug!("{method} {url} -> {}", reply.status);

        request.respond(into_response(reply))
    }
}

/// Convert a rendered reply into a tiny_http response
fn into_response(reply: HttpReply) -> Response<Cursor<Vec<u8>>> {
    let mut response = Response::from_data(reply.body).with_status_code(StatusCode(reply.status));
    if let Some(content_type) = reply.content_type
        && let Ok(header) = Header::from_bytes("Content-Type", content_type)
    {
        response.add_header(header);
    }
    response
}
