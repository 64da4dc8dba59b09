use std::net::SocketAddr;
use std::sync::Arc;

use admin_mock::AdminService;
use anyhow::{Context, Result};
use axum::Router;
use axum::response::Json;
use axum::routing::get;
use mock_scenarios::{ScenarioManager, ScenarioWrapper};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ServerConfig};

pub const HEALTH_PATH: &str = "/health";

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Health check, scenario control surface, fixture control and the wrapped
/// admin endpoints behind request tracing (and permissive CORS if enabled).
pub fn build_router(
    config: &AppConfig,
    manager: &Arc<ScenarioManager>,
    service: &Arc<AdminService>,
) -> Router {
    let wrapper = ScenarioWrapper::new(Arc::clone(manager), config.scenarios.delays.clone());

    let router = Router::new().route(HEALTH_PATH, get(health));
    let router = mock_scenarios::api::rest::register_routes(router, Arc::clone(manager));
    let router = admin_mock::register_routes(router, service, &wrapper);
    let router = admin_mock::register_control_routes(router, Arc::clone(service));

    let router = if config.server.cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };
    router.layer(TraceLayer::new_for_http())
}

/// Serves `router` until `cancel` fires, then drains in-flight requests.
///
/// # Errors
/// Fails if the listener cannot be bound or the server stops abnormally.
pub async fn serve(config: &ServerConfig, router: Router, cancel: CancellationToken) -> Result<()> {
    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Mock server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("mock server stopped with an error")?;

    tracing::info!("Mock server stopped");
    Ok(())
}
