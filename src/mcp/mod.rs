//! Model Context Protocol server layer.

pub mod handler;
pub mod prompts;
pub mod resources;
pub mod tools;
pub mod transport;
