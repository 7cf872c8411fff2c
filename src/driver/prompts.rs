//! Prompts scenario: list templates, then render `code_review`.

use std::io::Write;

use rmcp::model::GetPromptRequestParam;
use rmcp::service::{Peer, RoleClient};
use serde_json::json;

use super::{from_wire, text_at};
use crate::Result;

/// Code submitted for review.
pub const SAMPLE_CODE: &str = "function add(a, b) { return a + b; }";

/// Run the prompts scenario, previewing `preview_chars` characters.
///
/// # Errors
///
/// Returns `AppError` if a request fails or the transcript cannot be written.
pub async fn run<W>(peer: &Peer<RoleClient>, preview_chars: usize, out: &mut W) -> Result<()>
where
    W: Write + Send,
{
    writeln!(out, "\n📋 ========== Prompts Demo 测试 ==========\n")?;

    writeln!(out, "📋 可用提示模板列表：")?;
    let prompts = peer.list_all_prompts().await?;
    for (i, prompt) in prompts.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} - {}",
            i + 1,
            prompt.name,
            prompt.description.as_deref().unwrap_or_default()
        )?;
        if let Some(arguments) = prompt.arguments.as_ref().filter(|args| !args.is_empty()) {
            let names: Vec<&str> = arguments.iter().map(|arg| arg.name.as_str()).collect();
            writeln!(out, "     参数: {}", names.join(", "))?;
        }
    }

    writeln!(out, "\n📝 获取代码审查模板：")?;
    let request: GetPromptRequestParam = from_wire(json!({
        "name": "code_review",
        "arguments": { "code": SAMPLE_CODE, "language": "JavaScript" }
    }))?;
    let result = peer.get_prompt(request).await?;
    let text = text_at(&result, "/messages/0/content/text")?;

    writeln!(
        out,
        "  描述: {}",
        result.description.as_deref().unwrap_or_default()
    )?;
    writeln!(out, "  提示长度: {} 字符", text.chars().count())?;
    writeln!(out, "  提示预览:\n{}...", preview(&text, preview_chars))?;

    writeln!(out, "\n✅ Prompts Demo 测试完成\n")?;
    Ok(())
}

/// First `chars` characters of `text`.
#[must_use]
pub fn preview(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
