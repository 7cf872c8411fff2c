//! Tracing subscriber setup shared by both binaries.
//!
//! Stdout carries the MCP stream for servers, so logs always go to stderr.

use clap::ValueEnum;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{AppError, Result};

/// Log output format.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Install the global subscriber; `RUST_LOG` overrides the `info` default.
///
/// # Errors
///
/// Returns `AppError::Config` if a global subscriber is already set.
pub fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
