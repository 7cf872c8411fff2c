//! Tool registry and invoker for the tools demo server.
//!
//! Every failure inside a tool call is caught here and turned into a
//! [`ToolOutcome`] flagged as an error, so `tools/call` never surfaces a
//! protocol-level failure.

pub mod calculate;
pub mod get_weather;

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{info, warn};

/// Closed set of tools exposed by the tools server.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ToolName {
    /// Four-function calculator.
    Calculate,
    /// Seeded weather lookup.
    GetWeather,
}

impl ToolName {
    /// All tools in the order `tools/list` reports them.
    pub const ALL: [Self; 2] = [Self::Calculate, Self::GetWeather];

    /// Wire name of the tool.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calculate => calculate::NAME,
            Self::GetWeather => get_weather::NAME,
        }
    }

    /// Descriptor advertised through `tools/list`.
    #[must_use]
    pub fn definition(self) -> Tool {
        match self {
            Self::Calculate => calculate::definition(),
            Self::GetWeather => get_weather::definition(),
        }
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_owned()))
    }
}

/// Failure raised while invoking a tool. Always reported in-band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// No tool is registered under this name.
    UnknownTool(String),
    /// Arguments are missing or have the wrong type.
    InvalidArguments(String),
    /// `calculate` received an operation outside the schema enum.
    UnknownOperation(String),
    /// `calculate` was asked to divide by zero.
    DivisionByZero,
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "未知的工具: {name}"),
            Self::InvalidArguments(detail) => write!(f, "参数无效: {detail}"),
            Self::UnknownOperation(op) => write!(f, "未知的运算类型: {op}"),
            Self::DivisionByZero => f.write_str("除数不能为零"),
        }
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool invocation: a single text block plus the error flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    /// Text returned to the caller.
    pub text: String,
    /// Whether the call failed.
    pub is_error: bool,
}

impl ToolOutcome {
    /// Successful outcome carrying `text`.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Failed outcome; the message is prefixed the same way for every tool.
    #[must_use]
    pub fn failure(err: &ToolError) -> Self {
        Self {
            text: format!("错误: {err}"),
            is_error: true,
        }
    }
}

impl From<ToolOutcome> for CallToolResult {
    fn from(outcome: ToolOutcome) -> Self {
        let content = vec![Content::text(outcome.text)];
        if outcome.is_error {
            Self::error(content)
        } else {
            // Successful calls omit `isError` entirely.
            let mut result = Self::success(content);
            result.is_error = None;
            result
        }
    }
}

/// Descriptors for every registered tool, in a stable order.
#[must_use]
pub fn definitions() -> Vec<Tool> {
    ToolName::ALL.into_iter().map(ToolName::definition).collect()
}

/// Invoke `name` with `arguments`, catching every failure.
#[must_use]
pub fn invoke(name: &str, arguments: Option<JsonObject>) -> ToolOutcome {
    let args = arguments.unwrap_or_default();
    let result = name.parse::<ToolName>().and_then(|tool| match tool {
        ToolName::Calculate => calculate::handle(args),
        ToolName::GetWeather => get_weather::handle(args),
    });

    match result {
        Ok(text) => {
            info!(tool = name, "tool call succeeded");
            ToolOutcome::success(text)
        }
        Err(err) => {
            warn!(tool = name, %err, "tool call failed");
            ToolOutcome::failure(&err)
        }
    }
}

/// Convert a `serde_json::Value::Object` into the `Arc<Map>` expected by `Tool`.
pub(crate) fn schema(value: serde_json::Value) -> Arc<JsonObject> {
    match value {
        serde_json::Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::default()),
    }
}

/// Decode tool arguments into a typed input struct.
pub(crate) fn parse_input<T>(args: JsonObject) -> Result<T, ToolError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|err| ToolError::InvalidArguments(err.to_string()))
}
