//! The host spawns the binary and owns its stdin/stdout for one session.
//! Nothing else may write to stdout, so logs go to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Serve a single session. Returns once the host closes stdin.
pub async fn run(server: McpServer) -> TransportResult<()> {
    let session = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::init(e.to_string()))?;

    let reason = session
        .waiting()
        .await
        .map_err(|e| TransportError::service(e.to_string()))?;

    info!("Host session closed: {:?}", reason);
    Ok(())
}
