//! How a client reaches the skill server.
//!
//! A desktop host normally spawns the binary and talks over stdin/stdout
//! (`stdio`). `tcp` gives every socket its own session, and `http` answers
//! single JSON-RPC posts without a session. Each is a cargo feature; the
//! tools, resources and prompts are identical on all three.

mod config;
mod error;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

use tracing::info;

use crate::core::McpServer;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;

/// Serve `server` on the transport named in its own config.
///
/// Stdio returns when the host hangs up; tcp and http run until the
/// process stops or the listener fails.
pub async fn serve(server: McpServer) -> TransportResult<()> {
    let transport = server.config().transport.clone();
    info!("{}", startup_line(&server, &transport));

    match transport {
        #[cfg(feature = "stdio")]
        TransportConfig::Stdio => stdio::run(server).await,
        #[cfg(feature = "tcp")]
        TransportConfig::Tcp(cfg) => tcp::run(cfg, server).await,
        #[cfg(feature = "http")]
        TransportConfig::Http(cfg) => http::run(cfg, server).await,
    }
}

fn startup_line(server: &McpServer, transport: &TransportConfig) -> String {
    format!(
        "{} serving {} tools over {} (skills in {})",
        server.name(),
        server.tools().len(),
        transport.description(),
        server.config().skills.root.display()
    )
}
