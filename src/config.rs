//! Demo client configuration parsing, validation, and server launch
//! resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::mode::ServerKind;
use crate::{AppError, Result};

/// File name of the server binary, looked up next to the client binary.
pub const SERVER_BIN_NAME: &str = "mcp-demos";

fn default_preview_chars() -> usize {
    200
}

/// How to spawn one demo server.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ServerLaunch {
    /// Executable to run.
    pub command: String,
    /// Arguments passed to `command`.
    #[serde(default)]
    pub args: Vec<String>,
}

impl ServerLaunch {
    /// Default launch: `server_bin <kind>`.
    #[must_use]
    pub fn for_binary(server_bin: &Path, kind: ServerKind) -> Self {
        Self {
            command: server_bin.to_string_lossy().into_owned(),
            args: vec![kind.as_str().to_owned()],
        }
    }
}

/// Per-scenario launch overrides.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ServersConfig {
    /// Override for the tools server.
    pub tools: Option<ServerLaunch>,
    /// Override for the resources server.
    pub resources: Option<ServerLaunch>,
    /// Override for the prompts server.
    pub prompts: Option<ServerLaunch>,
}

impl ServersConfig {
    /// Configured override for `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: ServerKind) -> Option<&ServerLaunch> {
        match kind {
            ServerKind::Tools => self.tools.as_ref(),
            ServerKind::Resources => self.resources.as_ref(),
            ServerKind::Prompts => self.prompts.as_ref(),
        }
    }
}

/// Demo client configuration parsed from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ClientConfig {
    /// Characters of the `code_review` prompt shown in the transcript.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    /// Launch overrides keyed by server kind.
    #[serde(default)]
    pub servers: ServersConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
            servers: ServersConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve how to spawn the server for `kind`.
    ///
    /// A configured override wins; otherwise `server_bin` (or the
    /// `mcp-demos` binary next to the running executable) is launched
    /// with the kind as its only argument.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if no override exists and the current
    /// executable path cannot be determined.
    pub fn launch_for(&self, kind: ServerKind, server_bin: Option<&Path>) -> Result<ServerLaunch> {
        if let Some(launch) = self.servers.get(kind) {
            return Ok(launch.clone());
        }

        let bin = match server_bin {
            Some(path) => path.to_path_buf(),
            None => sibling_server_bin()?,
        };
        Ok(ServerLaunch::for_binary(&bin, kind))
    }

    fn validate(&self) -> Result<()> {
        if self.preview_chars == 0 {
            return Err(AppError::Config(
                "preview_chars must be greater than zero".into(),
            ));
        }

        for kind in ServerKind::ALL {
            if let Some(launch) = self.servers.get(kind) {
                if launch.command.trim().is_empty() {
                    return Err(AppError::Config(format!(
                        "servers.{kind}.command must not be empty"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Path of `mcp-demos` in the directory of the running executable.
fn sibling_server_bin() -> Result<PathBuf> {
    let exe = env::current_exe()
        .map_err(|err| AppError::Config(format!("cannot locate current executable: {err}")))?;
    let dir = exe
        .parent()
        .ok_or_else(|| AppError::Config("current executable has no parent directory".into()))?;
    Ok(dir.join(format!("{SERVER_BIN_NAME}{}", env::consts::EXE_SUFFIX)))
}
