// file: src/mcp/server.rs
// description: MCP server exposing indicator extraction as an agent tool
// reference: https://docs.rs/rmcp

use crate::config::Config;
use crate::extractor::IndicatorExtractor;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::tool::Parameters;
use rmcp::model::*;
use rmcp::schemars::{self, JsonSchema};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExtractIndicatorsParams {
    /// Raw log text provided by the user. Can be multi-line.
    pub log_text: String,
}

#[derive(Clone)]
pub struct LogIndicatorsMcp {
    config: Arc<Mutex<Config>>,
    extractor: Arc<Mutex<Option<Arc<IndicatorExtractor>>>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LogIndicatorsMcp {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            extractor: Arc::new(Mutex::new(None)),
            tool_router: Self::tool_router(),
        }
    }

    pub fn get_tool_router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    /// Build the extractor from the configured vocabulary on first use
    async fn ensure_extractor(&self) -> Result<Arc<IndicatorExtractor>, McpError> {
        let mut extractor = self.extractor.lock().await;
        if let Some(existing) = extractor.as_ref() {
            return Ok(Arc::clone(existing));
        }

        let config = self.config.lock().await;
        let built =
            IndicatorExtractor::new(&config.extraction.keywords).map_err(|e| McpError {
                code: ErrorCode(-32603),
                message: format!("Failed to build extractor: {}", e).into(),
                data: None,
            })?;

        let built = Arc::new(built);
        *extractor = Some(Arc::clone(&built));
        Ok(built)
    }

    #[tool(
        description = "Extracts basic indicators from a log snippet: IP addresses, domains, URLs, file paths, status/error codes, and severity keywords. Returns a JSON object with the six category lists plus per-category counts."
    )]
    async fn extract_indicators(
        &self,
        Parameters(ExtractIndicatorsParams { log_text }): Parameters<ExtractIndicatorsParams>,
    ) -> Result<CallToolResult, McpError> {
        info!("MCP: extracting indicators from {} bytes of log text", log_text.len());

        let extractor = self.ensure_extractor().await?;
        let set = extractor.extract(&log_text);

        let json = serde_json::to_string_pretty(&set).map_err(|e| McpError {
            code: ErrorCode(-32603),
            message: format!("Failed to serialize result: {}", e).into(),
            data: None,
        })?;

        info!("MCP: extraction found {} indicators", set.total());

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get the active keyword vocabulary used by the indicator extractor")]
    async fn get_vocabulary(&self) -> Result<CallToolResult, McpError> {
        info!("MCP: reporting keyword vocabulary");

        let config = self.config.lock().await;

        let vocab_text = format!(
            "Keyword vocabulary ({} entries, matched case-insensitively):\n{}",
            config.extraction.keywords.len(),
            config
                .extraction
                .keywords
                .iter()
                .map(|k| format!("  - {}", k))
                .collect::<Vec<_>>()
                .join("\n")
        );

        Ok(CallToolResult::success(vec![Content::text(vocab_text)]))
    }
}

#[tool_handler]
impl ServerHandler for LogIndicatorsMcp {}
