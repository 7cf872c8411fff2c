//! `data://` MCP resources: users, products, and application settings.
//!
//! Three literal URIs return whole collections; the `data://users/{id}`
//! template returns a single user.

use rmcp::model::{
    AnnotateAble, ListResourceTemplatesResult, ListResourcesResult, RawResource,
    ReadResourceResult, ResourceContents, ResourceTemplate,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use super::ResourceError;
use crate::models::catalog::{self, APP_CONFIG, PRODUCTS, USERS};

/// MIME type shared by every `data://` resource.
pub const MIME_JSON: &str = "application/json";

/// Prefix of the per-user resource template.
const USER_PREFIX: &str = "data://users/";

/// Id reported for a user segment with no leading digits.
const NOT_A_NUMBER: &str = "NaN";

/// URI template of the per-user resource.
pub const USER_TEMPLATE: &str = "data://users/{id}";

/// A parsed `data://` URI.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResourceUri {
    /// `data://users`
    Users,
    /// `data://products`
    Products,
    /// `data://config`
    Config,
    /// `data://users/{id}`
    User(i64),
}

/// Static listing entry.
struct Listing {
    uri: &'static str,
    name: &'static str,
    description: &'static str,
}

/// Resources advertised through `resources/list`, in order.
const LISTINGS: &[Listing] = &[
    Listing {
        uri: "data://users",
        name: "用户列表",
        description: "系统中所有用户的信息",
    },
    Listing {
        uri: "data://products",
        name: "产品目录",
        description: "所有可用产品的列表和价格",
    },
    Listing {
        uri: "data://config",
        name: "系统配置",
        description: "应用程序的配置信息",
    },
    Listing {
        uri: "data://users/1",
        name: "用户详情 - 张三",
        description: "ID为1的用户详细信息",
    },
];

/// Parse a `data://` URI.
///
/// The last path segment after `data://users/` carries the user id. Only
/// its leading integer counts: `data://users/2abc` is user 2, while
/// `data://users/1/extra` has no leading digits and names no user.
///
/// # Errors
///
/// Returns `ResourceError::UserNotFound` when the id segment does not start
/// with an integer, and `ResourceError::UnknownUri` for anything else
/// unmatched.
///
/// # Examples
///
/// ```
/// use mcp_demos::mcp::resources::data::{parse_resource_uri, ResourceUri};
///
/// assert_eq!(parse_resource_uri("data://users/2"), Ok(ResourceUri::User(2)));
/// assert_eq!(parse_resource_uri("data://users/2abc"), Ok(ResourceUri::User(2)));
/// assert!(parse_resource_uri("file:///etc/passwd").is_err());
/// ```
pub fn parse_resource_uri(uri: &str) -> Result<ResourceUri, ResourceError> {
    match uri {
        "data://users" => Ok(ResourceUri::Users),
        "data://products" => Ok(ResourceUri::Products),
        "data://config" => Ok(ResourceUri::Config),
        _ => {
            let rest = uri
                .strip_prefix(USER_PREFIX)
                .ok_or_else(|| ResourceError::UnknownUri(uri.to_owned()))?;
            let segment = rest.rsplit('/').next().unwrap_or(rest);
            leading_integer(segment).map(ResourceUri::User)
        }
    }
}

/// Read the optionally signed run of ASCII digits at the start of `segment`,
/// after any leading whitespace. Trailing text is ignored.
fn leading_integer(segment: &str) -> Result<i64, ResourceError> {
    let trimmed = segment.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return Err(ResourceError::UserNotFound(NOT_A_NUMBER.into()));
    }

    let digits_len = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(ResourceError::UserNotFound(NOT_A_NUMBER.into()));
    }

    let literal = &trimmed[..sign_len + digits_len];
    literal
        .parse::<i64>()
        .map_err(|_| ResourceError::UserNotFound(literal.trim_start_matches('+').to_owned()))
}

/// Build the `ListResourcesResult` for every literal `data://` resource.
#[must_use]
pub fn list_resources() -> ListResourcesResult {
    let resources = LISTINGS
        .iter()
        .map(|listing| {
            let mut raw = RawResource::new(listing.uri, listing.name);
            raw.description = Some(listing.description.into());
            raw.mime_type = Some(MIME_JSON.into());
            raw.no_annotation()
        })
        .collect();

    ListResourcesResult::with_all_items(resources)
}

/// Build the `ListResourceTemplatesResult` for `data://users/{id}`.
///
/// # Errors
///
/// Returns `ResourceError::Serialization` if the template descriptor does
/// not match the SDK model.
pub fn resource_templates() -> Result<ListResourceTemplatesResult, ResourceError> {
    let template: ResourceTemplate = serde_json::from_value(json!({
        "uriTemplate": USER_TEMPLATE,
        "name": "用户详情",
        "description": "按ID读取单个用户的详细信息",
        "mimeType": MIME_JSON,
    }))
    .map_err(|err| ResourceError::Serialization(err.to_string()))?;

    Ok(ListResourceTemplatesResult::with_all_items(vec![template]))
}

/// Body of a successful read, before it is wrapped for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBody {
    /// URI exactly as requested.
    pub uri: String,
    /// MIME type of `text`.
    pub mime_type: &'static str,
    /// Pretty-printed JSON payload.
    pub text: String,
}

impl From<ResourceBody> for ReadResourceResult {
    fn from(body: ResourceBody) -> Self {
        let mut contents = ResourceContents::text(body.text, body.uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(body.mime_type.to_owned());
        }
        Self {
            contents: vec![contents],
        }
    }
}

/// Handle `resources/read` for a `data://` URI.
///
/// # Errors
///
/// Returns `ResourceError::UserNotFound` for an absent user id and
/// `ResourceError::UnknownUri` for an unrecognized URI.
pub fn read_resource(uri: &str) -> Result<ResourceBody, ResourceError> {
    let parsed = parse_resource_uri(uri)?;
    debug!(uri, ?parsed, "reading data resource");

    let text = match parsed {
        ResourceUri::Users => pretty(USERS)?,
        ResourceUri::Products => pretty(PRODUCTS)?,
        ResourceUri::Config => pretty(&APP_CONFIG)?,
        ResourceUri::User(id) => {
            let user = u32::try_from(id)
                .ok()
                .and_then(catalog::find_user)
                .ok_or_else(|| ResourceError::UserNotFound(id.to_string()))?;
            pretty(user)?
        }
    };

    info!(uri, bytes = text.len(), "data resource read");
    Ok(ResourceBody {
        uri: uri.to_owned(),
        mime_type: MIME_JSON,
        text,
    })
}

/// Two-space indented JSON.
fn pretty<T>(value: &T) -> Result<String, ResourceError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string_pretty(value).map_err(|err| ResourceError::Serialization(err.to_string()))
}
