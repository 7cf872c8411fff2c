//! Stdio transport setup.
//!
//! Wires a demo server to stdin/stdout so any MCP host can launch it as a
//! subprocess.

use rmcp::handler::server::ServerHandler;
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{PromptsDemoServer, ResourcesDemoServer, ToolsDemoServer};
use crate::mode::ServerKind;
use crate::{AppError, Result};

/// Serve `kind` over stdio until the peer disconnects or the token fires.
///
/// # Errors
///
/// Returns `AppError::Transport` if the transport fails to initialize or
/// the service ends abnormally.
pub async fn serve_stdio(kind: ServerKind, ct: CancellationToken) -> Result<()> {
    match kind {
        ServerKind::Tools => serve(ToolsDemoServer, kind, ct).await,
        ServerKind::Resources => serve(ResourcesDemoServer, kind, ct).await,
        ServerKind::Prompts => serve(PromptsDemoServer, kind, ct).await,
    }
}

async fn serve<S>(server: S, kind: ServerKind, ct: CancellationToken) -> Result<()>
where
    S: ServerHandler,
{
    info!(server = kind.server_name(), "starting stdio MCP transport");
    let service = server
        .serve_with_ct(stdio(), ct)
        .await
        .map_err(|err| AppError::Transport(format!("stdio transport failed: {err}")))?;

    let reason = service
        .waiting()
        .await
        .map_err(|err| AppError::Transport(format!("stdio service error: {err}")))?;

    info!(server = kind.server_name(), ?reason, "stdio MCP transport shut down");
    Ok(())
}
