//! Tools scenario: list tools, add two numbers, look up Beijing weather.

use std::io::Write;

use rmcp::model::CallToolRequestParam;
use rmcp::service::{Peer, RoleClient};
use serde_json::json;

use super::{from_wire, text_at};
use crate::Result;

/// Run the tools scenario.
///
/// # Errors
///
/// Returns `AppError` if a request fails or the transcript cannot be written.
pub async fn run<W>(peer: &Peer<RoleClient>, out: &mut W) -> Result<()>
where
    W: Write + Send,
{
    writeln!(out, "\n🔧 ========== Tools Demo 测试 ==========\n")?;

    writeln!(out, "📋 可用工具列表：")?;
    let tools = peer.list_all_tools().await?;
    for (i, tool) in tools.iter().enumerate() {
        let description = tool.description.as_deref().unwrap_or_default();
        writeln!(out, "  {}. {} - {description}", i + 1, tool.name)?;
    }

    writeln!(out, "\n🧮 测试计算工具：123 + 456")?;
    let request: CallToolRequestParam = from_wire(json!({
        "name": "calculate",
        "arguments": { "operation": "add", "a": 123, "b": 456 }
    }))?;
    let result = peer.call_tool(request).await?;
    writeln!(out, "  结果: {}", text_at(&result, "/content/0/text")?)?;

    writeln!(out, "\n🌤️  测试天气工具：查询北京天气")?;
    let request: CallToolRequestParam = from_wire(json!({
        "name": "get_weather",
        "arguments": { "city": "beijing" }
    }))?;
    let result = peer.call_tool(request).await?;
    writeln!(out, "  结果:\n{}", text_at(&result, "/content/0/text")?)?;

    writeln!(out, "\n✅ Tools Demo 测试完成\n")?;
    Ok(())
}
