//! `code_review` prompt template.

use super::{ArgumentSpec, PromptArgs, PromptDescriptor, PromptError, RenderedPrompt};

/// Wire name of the template.
pub const NAME: &str = "code_review";

const ARGUMENTS: &[ArgumentSpec] = &[
    ArgumentSpec {
        name: "code",
        description: "要审查的代码",
        required: true,
    },
    ArgumentSpec {
        name: "language",
        description: "编程语言（如：JavaScript, Python, Java）",
        required: true,
    },
];

/// Descriptor advertised through `prompts/list`.
#[must_use]
pub fn descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: NAME,
        description: "对代码进行全面的审查，检查质量、性能和最佳实践",
        arguments: ARGUMENTS,
    }
}

/// Render the review request; the code is fenced with the language tag.
///
/// # Errors
///
/// Returns `PromptError::MissingArgument` for `code`, then `language`.
pub fn render(args: &PromptArgs) -> Result<RenderedPrompt, PromptError> {
    let code = args.required("code")?;
    let language = args.required("language")?;

    Ok(RenderedPrompt {
        description: format!("对 {language} 代码进行审查"),
        text: format!(
            "请对以下 {language} 代码进行全面审查：

```{language}
{code}
```

请从以下几个方面进行审查：
1. **代码质量**：可读性、命名规范、代码结构
2. **性能问题**：潜在的性能瓶颈或优化建议
3. **安全性**：可能的安全漏洞
4. **最佳实践**：是否遵循该语言的最佳实践
5. **Bug风险**：可能导致Bug的代码模式

请提供具体的改进建议和示例代码。"
        ),
    })
}
