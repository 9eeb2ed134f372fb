use std::borrow::Cow;

use agri_core::services::ToolError;
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use serde::Serialize;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Maps a dispatch failure onto an MCP error code.
pub fn tool_error(err: ToolError) -> ErrorData {
    let code = match err {
        ToolError::UnknownTool(_) | ToolError::InvalidArguments { .. } => ErrorCode::INVALID_PARAMS,
        ToolError::Serialize(_) => ErrorCode::INTERNAL_ERROR,
    };
    mcp_err(code, err.to_string())
}

/// Wraps a report as a successful JSON tool result.
pub fn json_result<T: Serialize>(report: T) -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::success(vec![Content::json(report)?]))
}
