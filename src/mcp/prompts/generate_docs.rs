//! `generate_docs` prompt template.

use super::{ArgumentSpec, PromptArgs, PromptDescriptor, PromptError, RenderedPrompt};

/// Wire name of the template.
pub const NAME: &str = "generate_docs";

/// Format used when the caller omits `format`.
pub const DEFAULT_FORMAT: &str = "markdown";

const ARGUMENTS: &[ArgumentSpec] = &[
    ArgumentSpec {
        name: "code",
        description: "要生成文档的代码",
        required: true,
    },
    ArgumentSpec {
        name: "format",
        description: "文档格式（如：markdown, jsdoc, sphinx）",
        required: false,
    },
];

/// Descriptor advertised through `prompts/list`.
#[must_use]
pub fn descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: NAME,
        description: "为代码生成详细的文档",
        arguments: ARGUMENTS,
    }
}

/// Render the documentation request.
///
/// # Errors
///
/// Returns `PromptError::MissingArgument` when `code` is absent or empty.
pub fn render(args: &PromptArgs) -> Result<RenderedPrompt, PromptError> {
    let code = args.required("code")?;
    let format = args.optional_or("format", DEFAULT_FORMAT);

    Ok(RenderedPrompt {
        description: format!("生成 {format} 格式的代码文档"),
        text: format!(
            "请为以下代码生成详细的文档（格式：{format}）：

```
{code}
```

文档应包含：
1. **功能概述**：代码的主要功能和用途
2. **参数说明**：每个参数的类型、描述和默认值
3. **返回值**：返回值的类型和说明
4. **使用示例**：1-2个实际使用示例
5. **注意事项**：使用时需要注意的事项

请使用 {format} 格式输出。"
        ),
    })
}
