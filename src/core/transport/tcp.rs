//! Line-delimited JSON-RPC over TCP.
//!
//! Every accepted socket runs its own MCP session on a clone of the server,
//! so one client disconnecting never affects another.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Accept connections until the process stops.
pub async fn run(config: TcpConfig, server: McpServer) -> TransportResult<()> {
    let listener = bind(&config).await?;

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                if let Err(e) = stream.set_nodelay(true) {
                    warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
                }
                tokio::spawn(serve_connection(server.clone(), stream, peer));
            }
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                sleep(ACCEPT_BACKOFF).await;
            }
        }
    }
}

async fn bind(config: &TcpConfig) -> TransportResult<TcpListener> {
    let addr = config.address();
    TcpListener::bind(&addr)
        .await
        .map_err(|e| TransportError::bind(addr, e))
}

async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    info!("Client {} connected", peer);

    let session = match server.serve(stream).await {
        Ok(session) => session,
        Err(e) => {
            warn!("Handshake with {} failed: {}", peer, e);
            return;
        }
    };

    match session.waiting().await {
        Ok(reason) => info!("Client {} left: {:?}", peer, reason),
        Err(e) => warn!("Session with {} ended with error: {:?}", peer, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_conflict_names_address() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let config = TcpConfig {
            host: "127.0.0.1".to_string(),
            port,
        };
        let err = bind(&config).await.unwrap_err();
        assert!(err.to_string().contains(&format!("127.0.0.1:{}", port)));
    }
}
