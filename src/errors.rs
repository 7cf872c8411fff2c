//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all process-level failure modes.
///
/// Request-level failures (unknown tool, missing prompt argument, …) are
/// modelled by the per-capability errors in [`crate::mcp`]; this type only
/// covers what can stop a server or the demo driver.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// MCP protocol failure reported by the peer or the SDK.
    Mcp(String),
    /// Transport setup or teardown failure (stdio, child process).
    Transport(String),
    /// Peer returned a payload the driver could not interpret.
    UnexpectedResponse(String),
    /// File-system or I/O operation failure.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Mcp(msg) => write!(f, "mcp: {msg}"),
            Self::Transport(msg) => write!(f, "transport: {msg}"),
            Self::UnexpectedResponse(msg) => write!(f, "unexpected response: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rmcp::service::ServiceError> for AppError {
    fn from(err: rmcp::service::ServiceError) -> Self {
        Self::Mcp(err.to_string())
    }
}
