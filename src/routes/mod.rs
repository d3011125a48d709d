pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación con su middleware
pub fn create_app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.request_timeout))
        .layer(cors_middleware(&state.config.cors_origins));

    Router::new()
        .route("/health", get(health_check))
        .merge(vehicle_routes::create_vehicle_router())
        .layer(middleware)
        .with_state(state)
}

/// Endpoint de salud simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
