//! MCP resource handlers.
//!
//! Resource reads propagate their failures: a [`ResourceError`] becomes a
//! protocol-level `rmcp::ErrorData`, never a success-shaped payload.

pub mod data;

use std::fmt::{Display, Formatter};

/// Failure raised while reading a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// `data://users/{id}` named an id that is absent or not an integer.
    UserNotFound(String),
    /// The URI matches no listed resource or template.
    UnknownUri(String),
    /// A static payload failed to serialize.
    Serialization(String),
}

impl Display for ResourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound(id) => write!(f, "未找到用户 ID: {id}"),
            Self::UnknownUri(uri) => write!(f, "未知的资源 URI: {uri}"),
            Self::Serialization(detail) => write!(f, "序列化失败: {detail}"),
        }
    }
}

impl std::error::Error for ResourceError {}

impl From<ResourceError> for rmcp::ErrorData {
    fn from(err: ResourceError) -> Self {
        let message = format!("读取资源失败: {err}");
        match err {
            ResourceError::UserNotFound(_) | ResourceError::UnknownUri(_) => {
                Self::resource_not_found(message, None)
            }
            ResourceError::Serialization(_) => Self::internal_error(message, None),
        }
    }
}
