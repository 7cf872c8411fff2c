//! `bug_analysis` prompt template.

use super::{ArgumentSpec, PromptArgs, PromptDescriptor, PromptError, RenderedPrompt};

/// Wire name of the template.
pub const NAME: &str = "bug_analysis";

/// Placeholder used when the caller omits `error_logs`.
pub const NO_LOGS: &str = "无";

const ARGUMENTS: &[ArgumentSpec] = &[
    ArgumentSpec {
        name: "bug_description",
        description: "Bug的详细描述",
        required: true,
    },
    ArgumentSpec {
        name: "error_logs",
        description: "相关的错误日志",
        required: false,
    },
];

/// Descriptor advertised through `prompts/list`.
#[must_use]
pub fn descriptor() -> PromptDescriptor {
    PromptDescriptor {
        name: NAME,
        description: "分析Bug报告并提供解决方案",
        arguments: ARGUMENTS,
    }
}

/// Render the bug analysis request.
///
/// # Errors
///
/// Returns `PromptError::MissingArgument` when `bug_description` is absent
/// or empty.
pub fn render(args: &PromptArgs) -> Result<RenderedPrompt, PromptError> {
    let bug_description = args.required("bug_description")?;
    let error_logs = args.optional_or("error_logs", NO_LOGS);

    Ok(RenderedPrompt {
        description: "分析Bug并提供解决方案".to_owned(),
        text: format!(
            "请分析以下Bug并提供解决方案：

**Bug描述：**
{bug_description}

**错误日志：**
{error_logs}

请提供：
1. **根因分析**：Bug的可能原因
2. **重现步骤**：如何重现这个问题
3. **解决方案**：详细的修复步骤和代码示例
4. **预防措施**：如何避免类似问题
5. **测试建议**：如何验证修复是否有效"
        ),
    })
}
