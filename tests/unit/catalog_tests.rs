use mcp_demos::mcp::resources::data::{read_resource, MIME_JSON};
use mcp_demos::mcp::resources::ResourceError;
use rmcp::model::{ErrorCode, ReadResourceResult};
use serde_json::{json, Value};

fn read_json(uri: &str) -> Value {
    let body = read_resource(uri).expect("resource should be readable");
    assert_eq!(body.mime_type, MIME_JSON);
    assert_eq!(body.uri, uri);
    serde_json::from_str(&body.text).expect("payload is JSON")
}

#[test]
fn users_collection_lists_three_users() {
    let users = read_json("data://users");
    let names: Vec<&str> = users
        .as_array()
        .expect("array")
        .iter()
        .map(|u| u["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, ["张三", "李四", "王五"]);
}

#[test]
fn single_user_by_id() {
    assert_eq!(
        read_json("data://users/2"),
        json!({ "id": 2, "name": "李四", "role": "产品经理", "email": "lisi@example.com" })
    );
}

#[test]
fn payload_is_pretty_printed_in_field_order() {
    let body = read_resource("data://users/2").expect("readable");
    assert!(body.text.starts_with("{\n  \"id\": 2,\n  \"name\": \"李四\""));
}

#[test]
fn whole_prices_serialize_as_integers() {
    let body = read_resource("data://products").expect("readable");
    assert!(body.text.contains("\"price\": 20,"));
    assert!(body.text.contains("\"price\": 0.01,"));
    assert!(body.text.contains("\"price\": 100,"));
}

#[test]
fn config_uses_camel_case_keys() {
    assert_eq!(
        read_json("data://config"),
        json!({
            "appName": "MCP Demo App",
            "version": "1.0.0",
            "maxUsers": 1000,
            "features": ["tools", "resources", "prompts"]
        })
    );
}

#[test]
fn absent_user_is_not_found() {
    assert_eq!(
        read_resource("data://users/999"),
        Err(ResourceError::UserNotFound("999".into()))
    );
}

#[test]
fn user_id_with_trailing_text_reads_leading_integer() {
    let user = read_json("data://users/2abc");
    assert_eq!(user["id"], 2);
    assert_eq!(user["name"], "李四");
}

#[test]
fn non_numeric_user_id_reports_nan() {
    let err = rmcp::ErrorData::from(read_resource("data://users/abc").expect_err("not found"));
    assert_eq!(err.message, "读取资源失败: 未找到用户 ID: NaN");
}

#[test]
fn unknown_uri_is_rejected() {
    assert_eq!(
        read_resource("data://orders"),
        Err(ResourceError::UnknownUri("data://orders".into()))
    );
}

#[test]
fn errors_map_to_resource_not_found() {
    let err = rmcp::ErrorData::from(ResourceError::UserNotFound("999".into()));
    assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    assert_eq!(err.message, "读取资源失败: 未找到用户 ID: 999");
}

#[test]
fn wire_result_carries_uri_and_mime_type() {
    let body = read_resource("data://config").expect("readable");
    let result = ReadResourceResult::from(body);
    let wire = serde_json::to_value(&result).expect("serializable");
    assert_eq!(wire["contents"][0]["uri"], "data://config");
    assert_eq!(wire["contents"][0]["mimeType"], "application/json");
    assert!(wire["contents"][0]["text"].is_string());
}
