#![forbid(unsafe_code)]

//! `mcp-demos` — hosts one of the three demo MCP servers on stdio.

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use mcp_demos::logging::{init_tracing, LogFormat};
use mcp_demos::mcp::transport;
use mcp_demos::{AppError, Result, ServerKind};

#[derive(Debug, Parser)]
#[command(name = "mcp-demos", about = "MCP demo servers over stdio", version, long_about = None)]
struct Cli {
    /// Which demo server to host.
    #[arg(value_enum)]
    kind: ServerKind,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!(kind = %args.kind, "mcp-demos server bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args.kind))
}

async fn run(kind: ServerKind) -> Result<()> {
    let ct = CancellationToken::new();

    let signal_ct = ct.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("shutdown signal received");
        signal_ct.cancel();
    });

    transport::serve_stdio(kind, ct).await?;
    info!(server = kind.server_name(), "mcp-demos shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(%err, "ctrl-c signal handler failed");
        }
    }
}
