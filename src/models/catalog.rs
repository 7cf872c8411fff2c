//! Users, products and application settings exposed as `data://` resources.

use serde::{Serialize, Serializer};

/// A registered user of the demo application.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique user id.
    pub id: u32,
    /// Display name.
    pub name: &'static str,
    /// Job role.
    pub role: &'static str,
    /// Contact address.
    pub email: &'static str,
}

/// A purchasable product.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ProductRecord {
    /// Unique product id.
    pub id: u32,
    /// Product name.
    pub name: &'static str,
    /// Unit price; whole prices serialize without a fractional part.
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    /// Product category.
    pub category: &'static str,
}

/// Application-wide settings served at `data://config`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigRecord {
    /// Application display name.
    pub app_name: &'static str,
    /// Application version.
    pub version: &'static str,
    /// Seat limit.
    pub max_users: u32,
    /// Enabled MCP capabilities.
    pub features: &'static [&'static str],
}

/// Seeded users, ordered by id.
pub const USERS: &[UserRecord] = &[
    UserRecord {
        id: 1,
        name: "张三",
        role: "开发工程师",
        email: "zhangsan@example.com",
    },
    UserRecord {
        id: 2,
        name: "李四",
        role: "产品经理",
        email: "lisi@example.com",
    },
    UserRecord {
        id: 3,
        name: "王五",
        role: "设计师",
        email: "wangwu@example.com",
    },
];

/// Seeded products, ordered by id.
pub const PRODUCTS: &[ProductRecord] = &[
    ProductRecord {
        id: 101,
        name: "Claude Pro",
        price: 20.0,
        category: "AI服务",
    },
    ProductRecord {
        id: 102,
        name: "API访问",
        price: 0.01,
        category: "AI服务",
    },
    ProductRecord {
        id: 103,
        name: "企业版",
        price: 100.0,
        category: "AI服务",
    },
];

/// Application settings.
pub const APP_CONFIG: AppConfigRecord = AppConfigRecord {
    app_name: "MCP Demo App",
    version: "1.0.0",
    max_users: 1000,
    features: &["tools", "resources", "prompts"],
};

/// Find a user by id.
#[must_use]
pub fn find_user(id: u32) -> Option<&'static UserRecord> {
    USERS.iter().find(|user| user.id == id)
}

/// Serialize whole prices as integers (`20`) and keep fractions (`0.01`).
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)] // serde signature; range checked
fn serialize_price<S>(price: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() < 9.0e15 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}
