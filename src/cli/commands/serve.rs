//! Serve command
//!
//! Resolves configuration and runs the HTTP server until interrupted.

use std::path::Path;
use std::sync::Arc;

use todos::adapters::memory::MemoryTodoRepository;
use todos::config::{PORT_ENV, ServerConfig};
use todos::core::ports::TodoRepository;
use todos::server::TodoServer;

/// Start the todo server
pub fn serve(host: Option<String>, port: Option<u16>, config: Option<&Path>) -> anyhow::Result<()> {
    let port_var = std::env::var(PORT_ENV).ok();
    let config = ServerConfig::load(config)?
        .with_port_var(port_var.as_deref())?
        .with_overrides(host, port);

    let repo: Arc<dyn TodoRepository> = Arc::new(MemoryTodoRepository::new());
    let server = TodoServer::bind(&config.bind_addr(), repo)?;

    println!("Starting todos on {}...", config.bind_addr());
    println!("Open http://localhost:{} in your browser", config.port);
    println!();
    println!("Press Ctrl+C to stop");

    server.run()
}
