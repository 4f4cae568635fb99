use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde_json;

use crate::{
    catalog::{CheckContext, TranslationState},
    cli::args::CommonArgs,
    config::load_config,
    rules::{
        duplicates::check_duplicate_issues, empty::check_empty_issues,
        placeholders::check_placeholder_issues, plural_forms::check_plural_forms_issues,
        unfinished::check_unfinished_issues,
    },
};

use super::types::{
    CatalogOverview, ConfigDto, ConfigValues, GetConfigParams, IssueCounts, Pagination,
    QueryTranslationParams, QueryTranslationResult, ScanOverviewParams, ScanOverviewResult,
    ScanUnfinishedParams, UnfinishedItem, UnfinishedScanResult,
};

#[derive(Clone)]
pub struct LingoMcpServer {
    tool_router: ToolRouter<Self>,
}

fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let common = CommonArgs {
        catalogs_root: None,
        source_language: None,
        verbose: false,
    };
    CheckContext::with_root(Path::new(project_root_path), &common)
        .map_err(|e| McpError::internal_error(format!("Failed to load catalogs: {}", e), None))
}

fn to_json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl LingoMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get per-catalog completion statistics and issue counts without detailed items. Use this first to understand the overall state before diving into details."
    )]
    async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let catalogs: Vec<CatalogOverview> = ctx
            .catalogs
            .iter()
            .map(|catalog| {
                let finished = catalog
                    .messages()
                    .filter(|(_, m)| m.translation.state == TranslationState::Finished)
                    .count();
                let unfinished = catalog
                    .messages()
                    .filter(|(_, m)| m.translation.state == TranslationState::Unfinished)
                    .count();
                let reachable = finished + unfinished;
                let completion_percent = if reachable == 0 {
                    100.0
                } else {
                    (finished as f64 * 1000.0 / reachable as f64).round() / 10.0
                };
                CatalogOverview {
                    language: catalog.language_key(),
                    file_path: catalog.file_path.clone(),
                    total_messages: catalog.message_count(),
                    finished,
                    unfinished,
                    completion_percent,
                }
            })
            .collect();

        let overview = ScanOverviewResult {
            catalogs,
            issues: IssueCounts {
                unfinished: check_unfinished_issues(&ctx).len(),
                empty: check_empty_issues(&ctx).len(),
                duplicate: check_duplicate_issues(&ctx).len(),
                plural_forms: check_plural_forms_issues(&ctx).len(),
                placeholders: check_placeholder_issues(&ctx).len(),
                parse_errors: ctx.parse_errors().len(),
            },
        };

        to_json_result(&overview)
    }

    /// Scan for messages without a usable translation
    #[tool(
        description = "Scan for messages whose translation is unfinished, vanished, or obsolete. The host UI falls back to the source text for these. Returns paginated list."
    )]
    async fn scan_unfinished(
        &self,
        params: Parameters<ScanUnfinishedParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = load_context(&params.0.project_root_path)?;

        let all_items: Vec<UnfinishedItem> = check_unfinished_issues(&ctx)
            .into_iter()
            .filter(|issue| {
                params
                    .0
                    .language
                    .as_ref()
                    .is_none_or(|language| &issue.message.language == language)
            })
            .map(|issue| UnfinishedItem {
                language: issue.message.language,
                context: issue.message.context,
                source: issue.message.source,
                comment: issue.message.comment,
                state: issue.state.to_string(),
                file_path: issue.message.catalog_path,
                line: issue.message.line,
            })
            .collect();

        let total_count = all_items.len();

        let paginated: Vec<UnfinishedItem> =
            all_items.into_iter().skip(offset).take(limit).collect();

        let has_more = offset + paginated.len() < total_count;

        let scan_result = UnfinishedScanResult {
            total_count,
            items: paginated,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        to_json_result(&scan_result)
    }

    /// Resolve one translation lookup
    #[tool(
        description = "Resolve a (context, source, comment, count) lookup against one catalog. Always returns displayable text: falls back to the source text when no finished translation matches."
    )]
    async fn query_translation(
        &self,
        params: Parameters<QueryTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let translator = ctx.translator_for(&params.0.language).ok_or_else(|| {
            McpError::invalid_params(
                format!("No catalog loaded for language '{}'", params.0.language),
                None,
            )
        })?;

        let matched = translator
            .entry(
                &params.0.context,
                &params.0.source,
                params.0.comment.as_deref(),
            )
            .is_some_and(|t| t.is_usable());
        let resolved_text = translator
            .translate(
                &params.0.context,
                &params.0.source,
                params.0.comment.as_deref(),
                params.0.count,
            )
            .to_string();

        let result = QueryTranslationResult {
            language: params.0.language,
            resolved_text,
            matched,
        };

        to_json_result(&result)
    }

    /// Get the current lingo configuration
    #[tool(description = "Get the current lingo configuration.")]
    async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        to_json_result(&config_dto)
    }
}

impl Default for LingoMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for LingoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Lingo MCP helps AI agents work with Qt Linguist TS translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_overview - Get per-catalog completion statistics and issue counts\n\
                 3. scan_unfinished - Get messages without a usable translation (paginated)\n\
                 4. query_translation - Resolve one lookup, with source-text fallback\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state of each catalog\n\
                 2. Use scan_unfinished to list the messages that still show source-language text\n\
                 3. Use query_translation to verify what the UI will actually display for a message"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = LingoMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
