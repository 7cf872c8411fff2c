//! Resources scenario: list resources, then read users and products.

use std::io::Write;

use rmcp::model::ReadResourceRequestParam;
use rmcp::service::{Peer, RoleClient};
use serde_json::{json, Value};

use super::{from_wire, text_at};
use crate::{AppError, Result};

/// Run the resources scenario.
///
/// # Errors
///
/// Returns `AppError` if a request fails, a payload is not a JSON array,
/// or the transcript cannot be written.
pub async fn run<W>(peer: &Peer<RoleClient>, out: &mut W) -> Result<()>
where
    W: Write + Send,
{
    writeln!(out, "\n📚 ========== Resources Demo 测试 ==========\n")?;

    writeln!(out, "📋 可用资源列表：")?;
    let resources = peer.list_all_resources().await?;
    for (i, resource) in resources.iter().enumerate() {
        writeln!(out, "  {}. {} ({})", i + 1, resource.raw.name, resource.raw.uri)?;
        writeln!(
            out,
            "     {}",
            resource.raw.description.as_deref().unwrap_or_default()
        )?;
    }

    writeln!(out, "\n👥 读取用户列表资源：")?;
    writeln!(out, "  内容:")?;
    for user in read_array(peer, "data://users").await? {
        writeln!(out, "    - {} ({})", field(&user, "name"), field(&user, "role"))?;
    }

    writeln!(out, "\n🛍️  读取产品目录资源：")?;
    writeln!(out, "  内容:")?;
    for product in read_array(peer, "data://products").await? {
        writeln!(out, "    - {}: ¥{}", field(&product, "name"), field(&product, "price"))?;
    }

    writeln!(out, "\n✅ Resources Demo 测试完成\n")?;
    Ok(())
}

async fn read_array(peer: &Peer<RoleClient>, uri: &str) -> Result<Vec<Value>> {
    let request: ReadResourceRequestParam = from_wire(json!({ "uri": uri }))?;
    let result = peer.read_resource(request).await?;
    let text = text_at(&result, "/contents/0/text")?;

    match serde_json::from_str(&text) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(AppError::UnexpectedResponse(format!("{uri} is not a JSON array"))),
        Err(err) => Err(AppError::UnexpectedResponse(format!("{uri}: {err}"))),
    }
}

/// Display a JSON field the way a script would: strings bare, numbers in
/// their JSON spelling.
fn field(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_owned(),
    }
}
