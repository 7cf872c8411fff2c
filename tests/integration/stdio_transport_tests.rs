//! End-to-end runs against the real `mcp-demos` binary over stdio.

use std::path::PathBuf;

use mcp_demos::config::{ClientConfig, ServerLaunch};
use mcp_demos::driver::{connect, Driver};
use mcp_demos::ServerKind;
use rmcp::model::ReadResourceRequestParam;
use serde_json::json;

fn server_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mcp-demos"))
}

#[tokio::test]
async fn full_demo_runs_every_scenario_in_order() {
    let driver = Driver::new(ClientConfig::default(), Some(server_bin()));
    let mut out = Vec::new();
    driver.run(&[], &mut out).await.expect("demo succeeds");
    let text = String::from_utf8(out).expect("utf8");

    let tools = text.find("Tools Demo 测试 ====").expect("tools section");
    let resources = text.find("Resources Demo 测试 ====").expect("resources section");
    let prompts = text.find("Prompts Demo 测试 ====").expect("prompts section");
    assert!(tools < resources && resources < prompts);

    assert!(text.starts_with("🚀 MCP 三大核心概念演示\n"));
    assert!(text.contains("🎉 所有测试完成！"));
    assert!(text.contains("💡 提示："));
}

#[tokio::test]
async fn scenario_filter_runs_only_selected() {
    let driver = Driver::new(ClientConfig::default(), Some(server_bin()));
    let mut out = Vec::new();
    driver
        .run(&[ServerKind::Prompts, ServerKind::Tools], &mut out)
        .await
        .expect("demo succeeds");
    let text = String::from_utf8(out).expect("utf8");

    assert!(text.contains("Tools Demo 测试完成"));
    assert!(text.contains("Prompts Demo 测试完成"));
    assert!(!text.contains("Resources Demo"));
    assert!(text.find("Tools Demo").expect("tools") < text.find("Prompts Demo").expect("prompts"));
}

#[tokio::test]
async fn spawned_server_reports_its_identity() {
    let launch = ServerLaunch::for_binary(&server_bin(), ServerKind::Resources);
    let client = connect(&launch).await.expect("connects");

    let info = client.peer_info().expect("server info");
    assert_eq!(info.server_info.name, "resources-demo-server");

    let request: ReadResourceRequestParam =
        serde_json::from_value(json!({ "uri": "data://users/42" })).expect("params");
    assert!(client.read_resource(request).await.is_err());

    client.cancel().await.expect("close");
}

#[tokio::test]
async fn unlaunchable_server_aborts_the_run() {
    let config = ClientConfig::from_toml_str(
        "[servers.tools]\ncommand = \"/nonexistent/mcp-demos-missing\"",
    )
    .expect("valid config");
    let driver = Driver::new(config, Some(server_bin()));
    let mut out = Vec::new();

    assert!(driver.run(&[], &mut out).await.is_err());
    let text = String::from_utf8(out).expect("utf8");
    assert!(!text.contains("🎉 所有测试完成！"));
}
