//! Scenario transcripts produced against in-process servers.

use mcp_demos::config::ClientConfig;
use mcp_demos::driver::prompts::SAMPLE_CODE;
use mcp_demos::driver::run_scenario;
use mcp_demos::mcp::handler::{PromptsDemoServer, ResourcesDemoServer, ToolsDemoServer};
use mcp_demos::mcp::prompts;
use mcp_demos::ServerKind;
use serde_json::json;

use super::test_helpers::connect;

async fn transcript<S>(server: S, kind: ServerKind, config: &ClientConfig) -> String
where
    S: rmcp::handler::server::ServerHandler,
{
    let client = connect(server).await;
    let mut out = Vec::new();
    run_scenario(kind, &client, config, &mut out)
        .await
        .expect("scenario succeeds");
    client.cancel().await.expect("close");
    String::from_utf8(out).expect("utf8 transcript")
}

#[tokio::test]
async fn tools_transcript() {
    let text = transcript(ToolsDemoServer, ServerKind::Tools, &ClientConfig::default()).await;

    assert!(text.contains("🔧 ========== Tools Demo 测试 =========="));
    assert!(text.contains("  1. calculate - 执行基本的数学计算（加、减、乘、除）\n"));
    assert!(text.contains("  2. get_weather - 获取指定城市的天气信息\n"));
    assert!(text.contains("  结果: 计算结果: 123 add 456 = 579\n"));
    assert!(text.contains("  结果:\nbeijing 的天气:\n温度: 5°C\n天气: 晴天\n湿度: 45%\n"));
    assert!(text.contains("✅ Tools Demo 测试完成"));
}

#[tokio::test]
async fn resources_transcript() {
    let text = transcript(
        ResourcesDemoServer,
        ServerKind::Resources,
        &ClientConfig::default(),
    )
    .await;

    assert!(text.contains("  1. 用户列表 (data://users)\n     系统中所有用户的信息\n"));
    assert!(text.contains("  4. 用户详情 - 张三 (data://users/1)\n"));
    assert!(text.contains("    - 张三 (开发工程师)\n"));
    assert!(text.contains("    - 王五 (设计师)\n"));
    assert!(text.contains("    - Claude Pro: ¥20\n"));
    assert!(text.contains("    - API访问: ¥0.01\n"));
    assert!(text.contains("    - 企业版: ¥100\n"));
}

#[tokio::test]
async fn prompts_transcript_respects_preview_length() {
    let config = ClientConfig {
        preview_chars: 10,
        ..ClientConfig::default()
    };
    let text = transcript(PromptsDemoServer, ServerKind::Prompts, &config).await;

    let expected_len = prompts::get(
        "code_review",
        json!({ "code": SAMPLE_CODE, "language": "JavaScript" })
            .as_object()
            .cloned(),
    )
    .expect("renders")
    .text
    .chars()
    .count();

    assert!(text.contains("  1. code_review - 对代码进行全面的审查，检查质量、性能和最佳实践\n     参数: code, language\n"));
    assert!(text.contains("     参数: bug_description, error_logs\n"));
    assert!(text.contains("  描述: 对 JavaScript 代码进行审查\n"));
    assert!(text.contains(&format!("  提示长度: {expected_len} 字符\n")));
    assert!(text.contains("  提示预览:\n请对以下 JavaS...\n"));
}
