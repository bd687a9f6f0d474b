use axum::Router;

use cardwatch_application::AppState;

use crate::handlers::{dashboard_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(dashboard_handlers::dashboard_page))
        .route(
            "/v1/dashboard",
            axum::routing::get(dashboard_handlers::dashboard_json),
        )
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .fallback(dashboard_handlers::not_found)
        .with_state(state)
}
