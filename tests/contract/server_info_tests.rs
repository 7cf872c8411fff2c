//! Contract tests for the identity and capabilities each server reports.

use mcp_demos::mcp::handler::{PromptsDemoServer, ResourcesDemoServer, ToolsDemoServer};
use rmcp::handler::server::ServerHandler;

#[test]
fn tools_server_advertises_tools_only() {
    let info = ToolsDemoServer.get_info();
    assert_eq!(info.server_info.name, "tools-demo-server");
    assert_eq!(info.server_info.version, "1.0.0");
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_none());
    assert!(info.capabilities.prompts.is_none());
}

#[test]
fn resources_server_advertises_resources_only() {
    let info = ResourcesDemoServer.get_info();
    assert_eq!(info.server_info.name, "resources-demo-server");
    assert_eq!(info.server_info.version, "1.0.0");
    assert!(info.capabilities.resources.is_some());
    assert!(info.capabilities.tools.is_none());
}

#[test]
fn prompts_server_advertises_prompts_only() {
    let info = PromptsDemoServer.get_info();
    assert_eq!(info.server_info.name, "prompts-demo-server");
    assert_eq!(info.server_info.version, "1.0.0");
    assert!(info.capabilities.prompts.is_some());
    assert!(info.capabilities.tools.is_none());
}
