//! Contract tests for tool input schemas.

use mcp_demos::mcp::tools::{calculate, get_weather};
use serde_json::json;

#[test]
fn calculate_schema_requires_all_fields() {
    let tool = calculate::definition();
    let schema = serde_json::Value::Object((*tool.input_schema).clone());

    assert_eq!(schema["type"], "object");
    assert_eq!(schema["required"], json!(["operation", "a", "b"]));
    assert_eq!(
        schema["properties"]["operation"]["enum"],
        json!(["add", "subtract", "multiply", "divide"])
    );
    assert_eq!(schema["properties"]["a"]["type"], "number");
    assert_eq!(schema["properties"]["b"]["type"], "number");
}

#[test]
fn get_weather_schema_requires_city() {
    let tool = get_weather::definition();
    let schema = serde_json::Value::Object((*tool.input_schema).clone());

    assert_eq!(schema["required"], json!(["city"]));
    assert_eq!(schema["properties"]["city"]["type"], "string");
    assert_eq!(
        schema["properties"]["city"]["description"],
        "城市名称（拼音小写，如：beijing, shanghai）"
    );
}

#[test]
fn wire_shape_uses_input_schema_key() {
    let wire = serde_json::to_value(calculate::definition()).expect("serializes");
    assert_eq!(wire["name"], "calculate");
    assert!(wire["inputSchema"].is_object());
}
