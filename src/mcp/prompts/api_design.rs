//! `api_design` prompt template.

use super::{ArgumentSpec, PromptArgs, PromptDescriptor, PromptError, RenderedPrompt};

/// Wire name of the template.
pub const NAME: &str = "api_design";

const ARGUMENTS: &[ArgumentSpec] = &[
    ArgumentSpec {
        name: "feature",
        description: "要实现的功能描述",
        required: true,
    },
    ArgumentSpec {
        name: "resources",
        description: "涉及的资源类型",
        required: true,
    },
];

/// Descriptor advertised through `prompts/list`.
#[must_use]
pub fn descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: NAME,
        description: "设计RESTful API接口",
        arguments: ARGUMENTS,
    }
}

/// Render the API design request.
///
/// # Errors
///
/// Returns `PromptError::MissingArgument` for `feature`, then `resources`.
pub fn render(args: &PromptArgs) -> Result<RenderedPrompt, PromptError> {
    let feature = args.required("feature")?;
    let resources = args.required("resources")?;

    Ok(RenderedPrompt {
        description: "设计RESTful API".to_owned(),
        text: format!(
            "请设计以下功能的RESTful API接口：

**功能需求：**
{feature}

**涉及的资源：**
{resources}

请提供：
1. **接口列表**：所有需要的API端点（GET/POST/PUT/DELETE）
2. **请求格式**：每个接口的请求参数和body结构
3. **响应格式**：成功和失败情况的响应示例
4. **状态码**：使用的HTTP状态码
5. **认证方式**：API的认证和授权机制
6. **错误处理**：统一的错误响应格式

请使用Markdown表格和代码块展示。"
        ),
    })
}
