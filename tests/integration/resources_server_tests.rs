//! Resources server over a real MCP session.

use mcp_demos::mcp::handler::ResourcesDemoServer;
use rmcp::model::{ErrorCode, ReadResourceRequestParam};
use rmcp::service::ServiceError;
use serde_json::json;

use super::test_helpers::{connect, params, text_at};

#[tokio::test]
async fn lists_resources_and_template() {
    let client = connect(ResourcesDemoServer).await;

    let resources = client.list_all_resources().await.expect("list resources");
    assert_eq!(resources.len(), 4);
    assert_eq!(resources[0].raw.uri, "data://users");

    let templates = client
        .list_all_resource_templates()
        .await
        .expect("list templates");
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].raw.uri_template, "data://users/{id}");

    client.cancel().await.expect("close");
}

#[tokio::test]
async fn reads_single_user() {
    let client = connect(ResourcesDemoServer).await;

    let request: ReadResourceRequestParam = params(json!({ "uri": "data://users/2" }));
    let result = client.read_resource(request).await.expect("read");

    assert_eq!(text_at(&result, "/contents/0/mimeType"), "application/json");
    let user: serde_json::Value =
        serde_json::from_str(&text_at(&result, "/contents/0/text")).expect("json payload");
    assert_eq!(
        user,
        json!({ "id": 2, "name": "李四", "role": "产品经理", "email": "lisi@example.com" })
    );

    client.cancel().await.expect("close");
}

#[tokio::test]
async fn absent_user_is_protocol_error() {
    let client = connect(ResourcesDemoServer).await;

    let request: ReadResourceRequestParam = params(json!({ "uri": "data://users/999" }));
    match client.read_resource(request).await {
        Err(ServiceError::McpError(err)) => {
            assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
            assert_eq!(err.message, "读取资源失败: 未找到用户 ID: 999");
        }
        other => panic!("expected resource-not-found error, got {other:?}"),
    }

    client.cancel().await.expect("close");
}

#[tokio::test]
async fn unknown_uri_is_protocol_error() {
    let client = connect(ResourcesDemoServer).await;

    let request: ReadResourceRequestParam = params(json!({ "uri": "file:///etc/hosts" }));
    let err = client.read_resource(request).await.unwrap_err();
    assert!(
        err.to_string().contains("未知的资源 URI"),
        "unexpected error: {err}"
    );

    client.cancel().await.expect("close");
}
