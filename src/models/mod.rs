//! Static demo data served by the three MCP servers.
//!
//! Every table here is a process-lifetime constant. Nothing mutates it and
//! no lookup ever falls back to a default record.

pub mod catalog;
pub mod weather;
