//! Demo driver: spawns each server as a subprocess, exercises it over
//! stdio, and prints a human-readable transcript.
//!
//! Scenarios run strictly one after another in [`ServerKind::ALL`] order.
//! Each scenario owns its connection; the client and child process are
//! shut down before the next scenario starts.

pub mod prompts;
pub mod resources;
pub mod tools;

use std::io::Write;
use std::path::PathBuf;

use rmcp::model::{ClientInfo, Implementation};
use rmcp::service::{Peer, RoleClient, RunningService, ServiceExt};
use rmcp::transport::{ConfigureCommandExt, TokioChildProcess};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::process::Command;
use tracing::{info, info_span, Instrument};

use crate::config::{ClientConfig, ServerLaunch};
use crate::mode::ServerKind;
use crate::{AppError, Result};

/// Name the client reports during initialization.
pub const CLIENT_NAME: &str = "demo-client";

/// Version the client reports during initialization.
pub const CLIENT_VERSION: &str = "1.0.0";

/// A connected client session.
pub type ClientSession = RunningService<RoleClient, ClientInfo>;

/// Client identity sent in the `initialize` request.
#[must_use]
pub fn client_info() -> ClientInfo {
    ClientInfo {
        client_info: Implementation {
            name: CLIENT_NAME.to_owned(),
            version: CLIENT_VERSION.to_owned(),
            ..Implementation::default()
        },
        ..ClientInfo::default()
    }
}

/// Spawn the server described by `launch` and complete the MCP handshake.
///
/// # Errors
///
/// Returns `AppError::Io` if the process cannot be spawned and
/// `AppError::Transport` if initialization fails.
pub async fn connect(launch: &ServerLaunch) -> Result<ClientSession> {
    let transport = TokioChildProcess::new(Command::new(&launch.command).configure(|cmd| {
        cmd.args(&launch.args);
    }))?;

    client_info()
        .serve(transport)
        .await
        .map_err(|err| AppError::Transport(format!("failed to initialize client: {err}")))
}

/// Run the scenario for `kind` against an already connected peer.
///
/// # Errors
///
/// Returns `AppError` if a request fails, a response has an unexpected
/// shape, or writing the transcript fails.
pub async fn run_scenario<W>(
    kind: ServerKind,
    peer: &Peer<RoleClient>,
    config: &ClientConfig,
    out: &mut W,
) -> Result<()>
where
    W: Write + Send,
{
    match kind {
        ServerKind::Tools => tools::run(peer, out).await,
        ServerKind::Resources => resources::run(peer, out).await,
        ServerKind::Prompts => prompts::run(peer, config.preview_chars, out).await,
    }
}

/// Sequential demo runner.
#[derive(Debug, Clone)]
pub struct Driver {
    config: ClientConfig,
    server_bin: Option<PathBuf>,
}

impl Driver {
    /// Create a driver; `server_bin` overrides the default server binary.
    #[must_use]
    pub fn new(config: ClientConfig, server_bin: Option<PathBuf>) -> Self {
        Self { config, server_bin }
    }

    /// Run the selected scenarios in canonical order; an empty selection
    /// runs all of them.
    ///
    /// # Errors
    ///
    /// Returns the first `AppError` raised by any scenario. Later scenarios
    /// are not run.
    pub async fn run<W>(&self, selected: &[ServerKind], out: &mut W) -> Result<()>
    where
        W: Write + Send,
    {
        writeln!(out, "🚀 MCP 三大核心概念演示\n")?;
        writeln!(out, "本演示将依次测试 Tools、Resources 和 Prompts\n")?;

        for kind in ServerKind::ALL {
            if !selected.is_empty() && !selected.contains(&kind) {
                continue;
            }
            self.run_one(kind, out)
                .instrument(info_span!("scenario", kind = %kind))
                .await?;
        }

        writeln!(out, "\n🎉 所有测试完成！\n")?;
        writeln!(out, "💡 提示：")?;
        writeln!(out, "  - 在 MCP 宿主应用中将 `mcp-demos tools|resources|prompts` 配置为 stdio 服务器")?;
        writeln!(out, "  - 重启宿主应用即可使用这些 MCP servers")?;
        writeln!(out, "  - 尝试: \"帮我计算 100 + 200\" 或 \"显示用户列表\"\n")?;
        Ok(())
    }

    async fn run_one<W>(&self, kind: ServerKind, out: &mut W) -> Result<()>
    where
        W: Write + Send,
    {
        let launch = self.config.launch_for(kind, self.server_bin.as_deref())?;
        info!(command = %launch.command, args = ?launch.args, "spawning server");

        let session = connect(&launch).await?;
        let outcome = run_scenario(kind, &session, &self.config, out).await;

        // Close the connection even when the scenario failed.
        let reason = session
            .cancel()
            .await
            .map_err(|err| AppError::Transport(format!("failed to close client: {err}")))?;
        info!(?reason, "server connection closed");

        outcome
    }
}

/// Build an outgoing SDK request parameter from its wire form.
pub(crate) fn from_wire<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value)
        .map_err(|err| AppError::Mcp(format!("failed to build request: {err}")))
}

/// Extract a string at `pointer` from the JSON form of an SDK result.
pub(crate) fn text_at<T>(result: &T, pointer: &str) -> Result<String>
where
    T: Serialize,
{
    let value = serde_json::to_value(result)
        .map_err(|err| AppError::UnexpectedResponse(err.to_string()))?;
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| AppError::UnexpectedResponse(format!("missing text at {pointer}")))
}
