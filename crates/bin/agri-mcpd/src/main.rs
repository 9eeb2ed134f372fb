//! Daemon entry point for the AgriLink advisory tools.
//!
//! Loads configuration from the environment, builds the tool registry, and
//! serves it over the enabled transports: MCP streamable HTTP, MCP stdio, and
//! the JSON tool-calling gateway.

mod config;
mod logging;

use std::sync::Arc;

use agri_core::clock::{Clock, FixedClock, SystemClock};
use agri_core::control::AdvisorControlPlane;
use agri_core::services::ToolRegistry;
use agri_gateway::{GatewayServer, GatewayServerConfig};
use agri_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use futures::future::{LocalBoxFuture, try_join_all};
use tracing::info;

use crate::config::AgriConfig;

type ServeResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> ServeResult {
    let env_file = config::load_env_file()?;
    let config = AgriConfig::from_args()?;
    logging::init(&config.log_filter)?;
    if let Some(path) = env_file {
        info!(path = %path.display(), "loaded environment file");
    }

    match config.fixed_month {
        Some(month) => {
            info!(month, "farming calendar pinned to a fixed month");
            run(&config, FixedClock::new(month)).await
        }
        None => run(&config, SystemClock).await,
    }
}

async fn run<K: Clock>(config: &AgriConfig, clock: K) -> ServeResult {
    let registry = Arc::new(ToolRegistry::new(AdvisorControlPlane::new(clock)));
    let mut servers: Vec<LocalBoxFuture<'static, ServeResult>> = Vec::new();

    if config.mcp_serve {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr)
            .with_stateful_mode(!config.mcp_stateless);
        servers.push(Box::pin(serve_streamable_http(registry.clone(), http_config)));
    }
    if config.gateway_serve {
        let gateway_config = GatewayServerConfig::new(config.gateway_addr)
            .with_max_body_bytes(config.gateway_max_body_bytes);
        servers.push(Box::pin(GatewayServer::new(registry.clone(), gateway_config).serve()));
    }
    if config.enable_stdio {
        servers.push(Box::pin(serve_stdio(registry)));
    }

    try_join_all(servers).await?;
    Ok(())
}
