//! MCP server implementation for agrilink-mcp.
//!
//! This crate wires the advisory resolver into rmcp tool handlers so a
//! conversational agent can call the farming tools over stdio or streamable
//! HTTP.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use agri_core::clock::Clock;
use agri_core::services::{ToolName, ToolRegistry};
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ErrorCode, ServerCapabilities, ServerInfo};
use serde::Serialize;

pub use tools::advisory::{
    CalendarParams,
    CropRecommendationParams,
    DiseaseParams,
    PracticesParams,
    WeatherParams,
};

const SERVER_INSTRUCTIONS: &str = r"You are AgriLink Assistant, a specialized agricultural advisor for farmers.

Role:
- Provide helpful farming advice, crop recommendations, and agricultural best practices.
- Help identify plant diseases from described symptoms.
- Offer sustainable farming techniques tailored to specific challenges.
- Help farmers plan seasonal activities with farming calendars.
- Provide weather information relevant to agricultural activities.

Guidelines:
- Always respond in the same language as the user (if the user speaks Arabic, respond in Arabic).
- Use a friendly, conversational tone. Keep small talk brief but warm.
- Give practical information without lengthy explanations.
- Acknowledge regional differences in farming techniques with minimal words.
- Start with a greeting and do not over-talk.

Tools:
- `lookup_weather` when users ask about weather conditions for farming activities.
- `get_crop_recommendations` to suggest crops for a soil type and region.
- `identify_plant_disease` when farmers describe crop symptoms.
- `get_farming_calendar` for seasonal planning.
- `get_sustainable_practices` for sustainability advice.
- `help` lists the tools; `usage_help` explains their arguments; `health` returns `ok`.";

/// MCP server wrapper around the tool registry and tool routers.
pub struct AgriMcp<K: Clock> {
    tool_router: ToolRouter<Self>,
    registry: Arc<ToolRegistry<K>>,
}

impl<K: Clock> Clone for AgriMcp<K> {
    fn clone(&self) -> Self {
        Self {
            tool_router: self.tool_router.clone(),
            registry: self.registry.clone(),
        }
    }
}

impl<K: Clock> AgriMcp<K> {
    /// Creates a new server using a registry by value.
    #[must_use]
    pub fn new(registry: ToolRegistry<K>) -> Self {
        Self::with_registry(Arc::new(registry))
    }

    /// Creates a new server using a shared registry handle.
    #[must_use]
    pub fn with_registry(registry: Arc<ToolRegistry<K>>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_advisory()
            + Self::tool_router_context();
        Self {
            tool_router,
            registry,
        }
    }

    pub(crate) fn registry(&self) -> &ToolRegistry<K> {
        &self.registry
    }

    /// Runs an advisory tool through the registry and wraps its JSON report.
    pub(crate) fn dispatch<P: Serialize>(
        &self,
        tool: ToolName,
        params: &P,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = serde_json::to_value(params)
            .map_err(|err| helpers::mcp_err(ErrorCode::INVALID_PARAMS, err.to_string()))?;
        let report = self
            .registry
            .call_tool(tool, arguments)
            .map_err(helpers::tool_error)?;
        helpers::json_result(report)
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl<K: Clock> AgriMcp<K> {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl<K: Clock> ServerHandler for AgriMcp<K> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
