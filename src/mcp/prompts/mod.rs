//! Prompt template registry for the prompts demo server.
//!
//! Each template declares its arguments and renders a single user message.
//! Failures propagate as [`PromptError`] and reach the client as
//! protocol-level errors.

pub mod api_design;
pub mod bug_analysis;
pub mod code_review;
pub mod generate_docs;

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rmcp::model::{GetPromptResult, JsonObject, Prompt};
use serde::Serialize;
use serde_json::Value;

/// Closed set of templates exposed by the prompts server.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PromptName {
    /// Multi-aspect code review.
    CodeReview,
    /// Documentation generation.
    GenerateDocs,
    /// Root-cause analysis of a bug report.
    BugAnalysis,
    /// REST API design.
    ApiDesign,
}

impl PromptName {
    /// All templates in the order `prompts/list` reports them.
    pub const ALL: [Self; 4] = [
        Self::CodeReview,
        Self::GenerateDocs,
        Self::BugAnalysis,
        Self::ApiDesign,
    ];

    /// Wire name of the template.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CodeReview => code_review::NAME,
            Self::GenerateDocs => generate_docs::NAME,
            Self::BugAnalysis => bug_analysis::NAME,
            Self::ApiDesign => api_design::NAME,
        }
    }

    /// Descriptor advertised through `prompts/list`.
    #[must_use]
    pub fn descriptor(self) -> PromptDescriptor {
        match self {
            Self::CodeReview => code_review::descriptor(),
            Self::GenerateDocs => generate_docs::descriptor(),
            Self::BugAnalysis => bug_analysis::descriptor(),
            Self::ApiDesign => api_design::descriptor(),
        }
    }

    /// Render the template against `args`.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::MissingArgument` naming the first required
    /// argument that is absent or empty.
    pub fn render(self, args: &PromptArgs) -> Result<RenderedPrompt, PromptError> {
        match self {
            Self::CodeReview => code_review::render(args),
            Self::GenerateDocs => generate_docs::render(args),
            Self::BugAnalysis => bug_analysis::render(args),
            Self::ApiDesign => api_design::render(args),
        }
    }
}

impl FromStr for PromptName {
    type Err = PromptError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|prompt| prompt.as_str() == name)
            .ok_or_else(|| PromptError::UnknownPrompt(name.to_owned()))
    }
}

/// Failure raised while rendering a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A required argument is absent or empty.
    MissingArgument(&'static str),
    /// No template is registered under this name.
    UnknownPrompt(String),
    /// A descriptor or rendered prompt did not match the SDK model.
    Serialization(String),
}

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument(field) => write!(f, "缺少必需参数：{field}"),
            Self::UnknownPrompt(name) => write!(f, "未知的提示模板: {name}"),
            Self::Serialization(detail) => write!(f, "序列化失败: {detail}"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<PromptError> for rmcp::ErrorData {
    fn from(err: PromptError) -> Self {
        let message = format!("获取提示失败: {err}");
        match err {
            PromptError::MissingArgument(_) | PromptError::UnknownPrompt(_) => {
                Self::invalid_params(message, None)
            }
            PromptError::Serialization(_) => Self::internal_error(message, None),
        }
    }
}

/// One declared template argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgumentSpec {
    /// Argument name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether rendering fails without it.
    pub required: bool,
}

/// Template metadata, serialized in the `prompts/list` wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptDescriptor {
    /// Template name.
    pub name: &'static str,
    /// Template description.
    pub description: &'static str,
    /// Arguments in declared order.
    pub arguments: &'static [ArgumentSpec],
}

impl PromptDescriptor {
    /// Names of the declared arguments, in order.
    #[must_use]
    pub fn argument_names(&self) -> Vec<&'static str> {
        self.arguments.iter().map(|arg| arg.name).collect()
    }
}

/// A rendered template: description plus the single user message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    /// Description interpolated with the caller's arguments.
    pub description: String,
    /// Body of the user message.
    pub text: String,
}

/// String arguments supplied to `prompts/get`.
///
/// Strings are kept verbatim, other JSON scalars keep their JSON spelling,
/// and `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptArgs(HashMap<String, String>);

impl PromptArgs {
    /// Build from the optional JSON object of a `prompts/get` request.
    #[must_use]
    pub fn from_json(arguments: Option<JsonObject>) -> Self {
        let map = arguments
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(text) => Some((key, text)),
                other => Some((key, other.to_string())),
            })
            .collect();
        Self(map)
    }

    /// Value of a required argument.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::MissingArgument` when the argument is absent
    /// or empty.
    pub fn required(&self, name: &'static str) -> Result<&str, PromptError> {
        match self.0.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(PromptError::MissingArgument(name)),
        }
    }

    /// Value of an optional argument, or `default` when it is absent.
    #[must_use]
    pub fn optional_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.0.get(name).map_or(default, String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for PromptArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Descriptors for every template, in a stable order.
#[must_use]
pub fn descriptors() -> Vec<PromptDescriptor> {
    PromptName::ALL.into_iter().map(PromptName::descriptor).collect()
}

/// Resolve `name` and render it against the request arguments.
///
/// # Errors
///
/// Returns `PromptError::UnknownPrompt` for an unregistered name, or the
/// template's own error.
pub fn get(name: &str, arguments: Option<JsonObject>) -> Result<RenderedPrompt, PromptError> {
    let prompt: PromptName = name.parse()?;
    prompt.render(&PromptArgs::from_json(arguments))
}

/// Convert a descriptor into the SDK `Prompt` model.
///
/// # Errors
///
/// Returns `PromptError::Serialization` if the wire shapes disagree.
pub fn to_prompt(descriptor: &PromptDescriptor) -> Result<Prompt, PromptError> {
    to_model(descriptor)
}

impl TryFrom<RenderedPrompt> for GetPromptResult {
    type Error = PromptError;

    fn try_from(rendered: RenderedPrompt) -> Result<Self, Self::Error> {
        to_model(&serde_json::json!({
            "description": rendered.description,
            "messages": [{
                "role": "user",
                "content": { "type": "text", "text": rendered.text }
            }]
        }))
    }
}

/// Round-trip a wire-shaped value into an SDK model type.
fn to_model<S, T>(value: &S) -> Result<T, PromptError>
where
    S: Serialize + ?Sized,
    T: serde::de::DeserializeOwned,
{
    serde_json::to_value(value)
        .and_then(serde_json::from_value)
        .map_err(|err| PromptError::Serialization(err.to_string()))
}
