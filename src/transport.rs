//! Process-level transports for the tool surface

use anyhow::Result;
use axum::{routing::get, Json, Router};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use rmcp::ServiceExt;
use serde_json::Value;

use crate::service::{liveness, AviationWeather};

/// Serves over stdin/stdout until the client disconnects
pub async fn serve_stdio(service: AviationWeather) -> Result<()> {
    let server = service.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;
    Ok(())
}

/// Streamable HTTP at `/mcp`, liveness check at `GET /mcp/`
pub async fn serve_http(service: AviationWeather, addr: &str) -> Result<()> {
    let app = http_app(service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("MCP endpoint listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Received shutdown signal");
        })
        .await?;

    Ok(())
}

pub fn http_app(service: AviationWeather) -> Router {
    let mcp = StreamableHttpService::new(
        move || Ok(service.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    Router::new()
        .route("/mcp/", get(liveness_check))
        .route_service("/mcp", mcp)
}

async fn liveness_check() -> Json<Value> {
    Json(liveness())
}
