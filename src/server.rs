use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::{OptimizeError, OptimizeResult};
use crate::optimizer::{Optimizer, Report};
use crate::request::OptimizeRequest;
use crate::capabilities;

#[derive(Clone)]
struct AppState {
    optimizer: Arc<Optimizer>,
}

pub fn create_router(optimizer: Optimizer) -> Router {
    let state = AppState {
        optimizer: Arc::new(optimizer),
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/capabilities", get(capabilities_handler))
        .route("/api/optimize", post(optimize_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(host: &str, port: u16, optimizer: Optimizer) -> OptimizeResult<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|err| OptimizeError::Server(format!("invalid bind address: {}", err)))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| OptimizeError::Server(format!("failed to bind server: {}", err)))?;
    info!(%addr, "script optimizer listening");

    axum::serve(listener, create_router(optimizer))
        .await
        .map_err(|err| OptimizeError::Server(err.to_string()))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn capabilities_handler() -> Json<Value> {
    Json(json!({ "tools": [capabilities()] }))
}

async fn optimize_handler(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<Report>, (StatusCode, Json<Value>)> {
    match state.optimizer.optimize(request) {
        Ok(report) => {
            info!(
                changes = report.optimizations.len(),
                warnings = report.warnings.len(),
                "optimize request completed"
            );
            Ok(Json(report))
        }
        Err(err) => {
            warn!(error = %err, "optimize request rejected");
            let status = if err.is_validation() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            let message = match err {
                OptimizeError::Validation(message) => message,
                other => other.to_string(),
            };
            Err((status, Json(json!({ "error": message }))))
        }
    }
}
