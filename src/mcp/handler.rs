//! MCP server handlers for the three demo servers.
//!
//! Each handler is a stateless unit struct over the static tables in
//! [`crate::models`]; every request is answered synchronously.

use std::future::Future;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, GetPromptRequestParam, GetPromptResult,
    Implementation, ListPromptsResult, ListResourceTemplatesResult, ListResourcesResult,
    ListToolsResult, PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use tracing::{info, info_span, warn};

use super::{prompts, resources, tools};
use crate::mode::ServerKind;

/// Version every demo server reports during initialization.
pub const SERVER_VERSION: &str = "1.0.0";

fn server_info(kind: ServerKind, capabilities: ServerCapabilities, instructions: &str) -> ServerInfo {
    ServerInfo {
        capabilities,
        server_info: Implementation {
            name: kind.server_name().to_owned(),
            version: SERVER_VERSION.to_owned(),
            ..Implementation::default()
        },
        instructions: Some(instructions.to_owned()),
        ..ServerInfo::default()
    }
}

/// Serves `calculate` and `get_weather`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolsDemoServer;

impl ServerHandler for ToolsDemoServer {
    fn get_info(&self) -> ServerInfo {
        server_info(
            ServerKind::Tools,
            ServerCapabilities::builder().enable_tools().build(),
            "计算器与天气查询工具演示",
        )
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, rmcp::ErrorData>> + Send + '_ {
        let _span = info_span!("call_tool", tool = %request.name).entered();
        let outcome = tools::invoke(&request.name, request.arguments);

        std::future::ready(Ok(CallToolResult::from(outcome)))
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, rmcp::ErrorData>> + Send + '_ {
        let tools = tools::definitions();
        info!(count = tools.len(), "listing tools");

        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }
}

/// Serves the `data://` catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourcesDemoServer;

impl ServerHandler for ResourcesDemoServer {
    fn get_info(&self) -> ServerInfo {
        server_info(
            ServerKind::Resources,
            ServerCapabilities::builder().enable_resources().build(),
            "用户、产品与系统配置数据资源演示",
        )
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, rmcp::ErrorData>> + Send + '_ {
        info!("listing resources");
        std::future::ready(Ok(resources::data::list_resources()))
    }

    fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourceTemplatesResult, rmcp::ErrorData>> + Send + '_
    {
        std::future::ready(resources::data::resource_templates().map_err(rmcp::ErrorData::from))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, rmcp::ErrorData>> + Send + '_ {
        let _span = info_span!("read_resource", uri = %request.uri).entered();
        let result = resources::data::read_resource(&request.uri)
            .map(ReadResourceResult::from)
            .map_err(|err| {
                warn!(%err, "resource read failed");
                rmcp::ErrorData::from(err)
            });

        std::future::ready(result)
    }
}

/// Serves the four prompt templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptsDemoServer;

impl ServerHandler for PromptsDemoServer {
    fn get_info(&self) -> ServerInfo {
        server_info(
            ServerKind::Prompts,
            ServerCapabilities::builder().enable_prompts().build(),
            "代码审查、文档生成、Bug分析与API设计提示模板演示",
        )
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListPromptsResult, rmcp::ErrorData>> + Send + '_ {
        let result = prompts::descriptors()
            .iter()
            .map(prompts::to_prompt)
            .collect::<Result<Vec<_>, _>>()
            .map(ListPromptsResult::with_all_items)
            .map_err(rmcp::ErrorData::from);

        std::future::ready(result)
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<GetPromptResult, rmcp::ErrorData>> + Send + '_ {
        let _span = info_span!("get_prompt", prompt = %request.name).entered();
        let result = prompts::get(&request.name, request.arguments)
            .and_then(GetPromptResult::try_from)
            .map_err(|err| {
                warn!(%err, "prompt rendering failed");
                rmcp::ErrorData::from(err)
            });

        std::future::ready(result)
    }
}
