//! Contract tests for the advertised tool surface.

use mcp_demos::mcp::tools::{self, ToolName};

#[test]
fn tools_are_listed_in_stable_order() {
    let names: Vec<String> = tools::definitions()
        .iter()
        .map(|tool| tool.name.to_string())
        .collect();
    assert_eq!(names, ["calculate", "get_weather"]);
}

#[test]
fn descriptions_match_contract() {
    let tools = tools::definitions();
    assert_eq!(
        tools[0].description.as_deref(),
        Some("执行基本的数学计算（加、减、乘、除）")
    );
    assert_eq!(tools[1].description.as_deref(), Some("获取指定城市的天气信息"));
}

#[test]
fn every_listed_name_parses_back() {
    for tool in tools::definitions() {
        let parsed: ToolName = tool.name.parse().expect("listed name parses");
        assert_eq!(parsed.as_str(), tool.name);
    }
}

#[test]
fn repeated_listing_is_byte_identical() {
    let first = serde_json::to_string(&tools::definitions()).expect("serializes");
    let second = serde_json::to_string(&tools::definitions()).expect("serializes");
    assert_eq!(first, second);
}
