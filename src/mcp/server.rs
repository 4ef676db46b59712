//! UUC MCP Server Implementation
//!
//! Implements the MCP server with all UUC tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::convert::ConvertError;
use crate::tools::status::{StatusTracker, CONVERSION_INSTRUCTIONS};
use crate::tools::units;

/// UUC MCP Service
#[derive(Clone)]
pub struct UucService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<UucService>,
}

impl UucService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for UucService {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a conversion error to an MCP error
///
/// All conversion errors are caller mistakes, not server faults.
fn param_error(e: ConvertError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Category name: temperature, length, time, or volume
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Category name: temperature, length, time, or volume
    pub category: String,
    /// Source unit: symbol or name, e.g. "°C" or "celsius"
    pub from: String,
    /// Destination unit: symbol or name, e.g. "°F" or "fahrenheit"
    pub to: String,
    /// Numeric value to convert
    pub value: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl UucService {
    // --- Status ---

    #[tool(description = "Get the current status of the UUC service including build info, catalog size, and process information")]
    async fn uuc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for converting values, including the full table of supported categories and units. Call this when starting a conversion session or when unsure which units exist.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            CONVERSION_INSTRUCTIONS,
        )]))
    }

    // --- Catalog ---

    #[tool(description = "List the supported measurement categories with their base units and unit counts")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        let result = units::list_categories();
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the units of a measurement category, in display order")]
    fn list_units(
        &self,
        Parameters(p): Parameters<ListUnitsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = units::list_units(&p.category).map_err(param_error)?;
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Conversion ---

    #[tool(description = "Convert a numeric value between two units of the same category")]
    async fn convert(
        &self,
        Parameters(p): Parameters<ConvertParams>,
    ) -> Result<CallToolResult, McpError> {
        let result =
            units::convert_value(&p.category, &p.from, &p.to, p.value).map_err(param_error)?;
        self.status_tracker.lock().await.record_conversion();
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for UucService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "uuc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Universal Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Universal Unit Converter (UUC) - converts values between units of temperature, \
                 length, time, and volume. \
                 Call conversion_instructions for the full unit table. \
                 Catalog: list_categories, list_units. \
                 Conversion: convert (category, from, to, value). \
                 Units accept symbols (°C, km, mL) or names (celsius, kilometers, milliliters). \
                 Units must belong to the requested category; invalid input is rejected, never \
                 silently converted to zero."
                    .into(),
            ),
        }
    }
}
