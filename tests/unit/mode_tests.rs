use clap::ValueEnum;
use mcp_demos::ServerKind;

#[test]
fn canonical_order_is_tools_resources_prompts() {
    assert_eq!(
        ServerKind::ALL,
        [ServerKind::Tools, ServerKind::Resources, ServerKind::Prompts]
    );
}

#[test]
fn server_names_match_kind() {
    assert_eq!(ServerKind::Tools.server_name(), "tools-demo-server");
    assert_eq!(ServerKind::Resources.server_name(), "resources-demo-server");
    assert_eq!(ServerKind::Prompts.server_name(), "prompts-demo-server");
}

#[test]
fn cli_spelling_round_trips() {
    for kind in ServerKind::ALL {
        let parsed = ServerKind::from_str(kind.as_str(), false).expect("parses");
        assert_eq!(parsed, kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn unknown_kind_is_rejected() {
    assert!(ServerKind::from_str("sampling", false).is_err());
}

#[test]
fn serde_uses_snake_case() {
    let json = serde_json::to_string(&ServerKind::Resources).expect("serializes");
    assert_eq!(json, "\"resources\"");
}
