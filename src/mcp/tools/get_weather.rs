//! `get_weather` MCP tool handler.
//!
//! Looks a city up in the seeded weather table. An unknown city is a soft
//! failure: the caller gets normal text listing the supported cities.

use rmcp::model::{JsonObject, Tool};
use serde::Deserialize;
use tracing::info;

use super::{parse_input, schema, ToolError};
use crate::models::weather;

/// Wire name of the tool.
pub const NAME: &str = "get_weather";

/// Input parameters per the advertised input schema.
#[derive(Debug, Deserialize)]
struct GetWeatherInput {
    /// City as typed by the caller; matched case-insensitively.
    city: String,
}

/// Descriptor advertised through `tools/list`.
#[must_use]
pub fn definition() -> Tool {
    Tool::new(
        NAME,
        "获取指定城市的天气信息",
        schema(serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "城市名称（拼音小写，如：beijing, shanghai）"
                }
            },
            "required": ["city"]
        })),
    )
}

/// Handle the `get_weather` tool call.
///
/// # Errors
///
/// Returns `ToolError::InvalidArguments` if `city` is missing or not a
/// string. An unknown city is not an error.
pub fn handle(args: JsonObject) -> Result<String, ToolError> {
    let input: GetWeatherInput = parse_input(args)?;

    let Some(record) = weather::find(&input.city) else {
        info!(city = %input.city, "no weather data for city");
        return Ok(format!(
            "未找到城市 \"{}\" 的天气信息。支持的城市：{}",
            input.city,
            weather::supported_cities()
        ));
    };

    Ok(format!(
        "{} 的天气:\n温度: {}°C\n天气: {}\n湿度: {}%",
        input.city, record.temp, record.condition, record.humidity
    ))
}
