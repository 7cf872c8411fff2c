//! `calculate` MCP tool handler.
//!
//! Four-function arithmetic over two JSON numbers. Division by zero and
//! operations outside the schema enum are reported as tool errors.

use std::str::FromStr;

use rmcp::model::{JsonObject, Tool};
use serde::Deserialize;
use tracing::debug;

use super::{parse_input, schema, ToolError};

/// Wire name of the tool.
pub const NAME: &str = "calculate";

/// Arithmetic operation accepted by `calculate`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, rejected when `b` is zero.
    Divide,
}

impl Operation {
    /// All operations, in schema enum order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Wire spelling of the operation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::DivisionByZero` when dividing by zero.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, ToolError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide if b == 0.0 => Err(ToolError::DivisionByZero),
            Self::Divide => Ok(a / b),
        }
    }
}

impl FromStr for Operation {
    type Err = ToolError;

    fn from_str(op: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == op)
            .ok_or_else(|| ToolError::UnknownOperation(op.to_owned()))
    }
}

/// Input parameters per the advertised input schema.
#[derive(Debug, Deserialize)]
struct CalculateInput {
    /// Operation name; validated after decoding so the error can name it.
    operation: String,
    /// Left operand.
    a: f64,
    /// Right operand.
    b: f64,
}

/// Descriptor advertised through `tools/list`.
#[must_use]
pub fn definition() -> Tool {
    let operations: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
    Tool::new(
        NAME,
        "执行基本的数学计算（加、减、乘、除）",
        schema(serde_json::json!({
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "enum": operations,
                    "description": "要执行的运算类型"
                },
                "a": { "type": "number", "description": "第一个数字" },
                "b": { "type": "number", "description": "第二个数字" }
            },
            "required": ["operation", "a", "b"]
        })),
    )
}

/// Handle the `calculate` tool call.
///
/// # Errors
///
/// Returns `ToolError` for malformed arguments, an unknown operation, or
/// division by zero.
pub fn handle(args: JsonObject) -> Result<String, ToolError> {
    let input: CalculateInput = parse_input(args)?;
    let operation: Operation = input.operation.parse()?;
    let result = operation.apply(input.a, input.b)?;

    debug!(operation = operation.as_str(), a = input.a, b = input.b, result, "calculated");

    Ok(format!(
        "计算结果: {} {} {} = {}",
        format_number(input.a),
        operation.as_str(),
        format_number(input.b),
        format_number(result)
    ))
}

/// Render a number the way a JavaScript client prints it: shortest
/// round-trip form with no trailing `.0`, exponent form (`1e+21`, `1e-7`)
/// outside `[1e-6, 1e21)`, and spelled-out non-finite values.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value == f64::INFINITY {
        "Infinity".to_owned()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else if value == 0.0 {
        // Collapses -0 as well.
        "0".to_owned()
    } else if (1e-6..1e21).contains(&value.abs()) {
        value.to_string()
    } else {
        let exp = format!("{value:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    }
}
