//! Which of the three demo servers a process hosts.
//!
//! `ServerKind` is the positional CLI argument of `mcp-demos` and the
//! scenario selector of `mcp-demos-client`.

use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the three independent demo servers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerKind {
    /// Calculator and weather tools.
    Tools,
    /// Read-only `data://` resources.
    Resources,
    /// Parameterized prompt templates.
    Prompts,
}

impl ServerKind {
    /// All kinds in the order the demo driver runs them.
    pub const ALL: [Self; 3] = [Self::Tools, Self::Resources, Self::Prompts];

    /// CLI spelling of the kind, also used as the server argument.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::Resources => "resources",
            Self::Prompts => "prompts",
        }
    }

    /// Server name reported during MCP initialization.
    #[must_use]
    pub fn server_name(self) -> &'static str {
        match self {
            Self::Tools => "tools-demo-server",
            Self::Resources => "resources-demo-server",
            Self::Prompts => "prompts-demo-server",
        }
    }
}

impl Display for ServerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
