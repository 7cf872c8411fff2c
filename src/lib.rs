#![forbid(unsafe_code)]

//! Three single-purpose MCP demo servers (tools, resources, prompts) and a
//! scripted client that exercises them over stdio.

pub mod config;
pub mod driver;
pub mod errors;
pub mod logging;
pub mod mcp;
pub mod mode;
pub mod models;

pub use config::ClientConfig;
pub use errors::{AppError, Result};
pub use mode::ServerKind;
