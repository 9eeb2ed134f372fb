//! HTTP tool-calling gateway for agrilink-mcp.
//!
//! Exposes the tool registry to orchestrators that post JSON tool calls
//! instead of speaking MCP.

use std::net::SocketAddr;
use std::sync::Arc;

use agri_core::clock::Clock;
use agri_core::services::{ToolDescriptor, ToolError, ToolRegistry};
use axum::Router;
use axum::extract::{DefaultBodyLimit, Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

/// Configuration for the gateway HTTP server.
#[derive(Debug, Clone)]
pub struct GatewayServerConfig {
    pub addr: SocketAddr,
    pub max_body_bytes: usize,
}

impl GatewayServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            max_body_bytes: 64 * 1024,
        }
    }

    #[must_use]
    pub const fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// HTTP gateway wrapper.
pub struct GatewayServer<K: Clock> {
    config: GatewayServerConfig,
    state: AppState<K>,
}

impl<K: Clock> GatewayServer<K> {
    #[must_use]
    pub const fn new(registry: Arc<ToolRegistry<K>>, config: GatewayServerConfig) -> Self {
        let state = AppState { registry };
        Self { config, state }
    }

    /// Runs the HTTP server until shutdown.
    ///
    /// # Errors
    /// Returns any listener or server error.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let app = build_router(self.state, self.config.max_body_bytes);

        info!("agri-gateway listening on {addr}");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

struct AppState<K: Clock> {
    registry: Arc<ToolRegistry<K>>,
}

impl<K: Clock> Clone for AppState<K> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<ToolError> for ApiError {
    fn from(err: ToolError) -> Self {
        let message = err.to_string();
        match err {
            ToolError::UnknownTool(_) => Self::not_found(message),
            ToolError::InvalidArguments { .. } => Self::bad_request(message),
            ToolError::Serialize(_) => Self::internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = Json(ErrorResponse { error: self.message });
        (self.status, payload).into_response()
    }
}

/// A tool invocation posted by an orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallPayload {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
}

/// Result of a tool invocation, tagged with the caller's call id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResponse {
    pub call_id: String,
    pub name: String,
    pub result: Value,
}

fn build_router<K: Clock>(state: AppState<K>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools::<K>))
        .route("/tools/call", post(call_tool::<K>))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn list_tools<K: Clock>(State(state): State<AppState<K>>) -> Json<Vec<ToolDescriptor>> {
    Json(state.registry.descriptors())
}

async fn call_tool<K: Clock>(
    State(state): State<AppState<K>>,
    Json(payload): Json<ToolCallPayload>,
) -> Result<Json<ToolCallResponse>, ApiError> {
    let call_id = payload
        .call_id
        .filter(|call_id| !call_id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let result = state
        .registry
        .call(&payload.name, payload.arguments)
        .map_err(|err| {
            warn!(%call_id, tool = %payload.name, error = %err, "tool call rejected");
            ApiError::from(err)
        })?;

    Ok(Json(ToolCallResponse {
        call_id,
        name: payload.name,
        result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::clock::FixedClock;
    use agri_core::control::AdvisorControlPlane;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    fn router(max_body_bytes: usize) -> Router {
        let registry = ToolRegistry::new(AdvisorControlPlane::new(FixedClock::new(7)));
        build_router(
            AppState {
                registry: Arc::new(registry),
            },
            max_body_bytes,
        )
    }

    async fn post_call(app: Router, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/tools/call")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build");
        let response = app.oneshot(request).await.expect("router should respond");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn call_returns_tool_result_with_call_id() {
        let (status, body) = post_call(
            router(64 * 1024),
            &json!({
                "name": "identify_plant_disease",
                "arguments": { "crop_type": "corn", "symptoms": "I see RUST COLORED SPOTS on leaves" },
                "call_id": "call-1"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["call_id"], "call-1");
        assert_eq!(body["name"], "identify_plant_disease");
        assert_eq!(body["result"]["diagnosis"], "Common rust");
    }

    #[tokio::test]
    async fn missing_call_id_is_generated() {
        let (status, body) = post_call(
            router(64 * 1024),
            &json!({ "name": "get_farming_calendar", "arguments": { "crop_type": "wheat" } }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let call_id = body["call_id"].as_str().expect("call id should be a string");
        assert!(Uuid::parse_str(call_id).is_ok());
        assert_eq!(body["result"]["current_season"], "summer");
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let (status, body) = post_call(
            router(64 * 1024),
            &json!({ "name": "sell_harvest", "arguments": {} }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown tool: sell_harvest");
    }

    #[tokio::test]
    async fn invalid_arguments_are_bad_request() {
        let (status, body) = post_call(
            router(64 * 1024),
            &json!({ "name": "get_crop_recommendations", "arguments": { "region": "Sousse" } }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().expect("error should be a string");
        assert!(message.contains("get_crop_recommendations"));
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let (status, _) = post_call(
            router(64),
            &json!({
                "name": "identify_plant_disease",
                "arguments": { "crop_type": "tomato", "symptoms": "yellow leaves ".repeat(32) }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn lists_registered_tools() {
        let request = Request::builder()
            .uri("/tools")
            .body(Body::empty())
            .expect("request should build");
        let response = router(64 * 1024)
            .oneshot(request)
            .await
            .expect("router should respond");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let tools: Vec<ToolDescriptor> =
            serde_json::from_slice(&bytes).expect("tools should parse");
        assert_eq!(tools.len(), 5);
        assert_eq!(tools[0].name, "lookup_weather");
    }
}
