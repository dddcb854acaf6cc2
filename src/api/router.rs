use std::any::Any;

use axum::{middleware, response::IntoResponse, response::Response, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

use super::middleware::{cors_middleware, logging_middleware, metrics_middleware};
use super::routing_demo::create_routing_router;
use super::state::AppState;
use super::types::ApiError;
use super::users::create_users_router;

/// Create the users API with its middleware stack
pub fn create_users_app(
    state: AppState,
    config: &AppConfig,
    metrics: Option<PrometheusMetrics>,
) -> Router {
    finish(create_users_router().with_state(state), config, metrics)
}

/// Create the routing demo with its middleware stack
pub fn create_routing_app(
    state: AppState,
    config: &AppConfig,
    metrics: Option<PrometheusMetrics>,
) -> Router {
    finish(create_routing_router().with_state(state), config, metrics)
}

/// `/metrics` is merged first so it sits behind the same layers as every
/// other route
fn finish(router: Router, config: &AppConfig, metrics: Option<PrometheusMetrics>) -> Router {
    let router = match metrics {
        Some(m) => router.merge(create_metrics_router(m, &config.observability.metrics.path)),
        None => router,
    };

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(
            config.cors.clone(),
            cors_middleware,
        ))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

/// A panicking handler becomes a 400 envelope carrying the panic message
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };

    tracing::error!(error = %message, "Error processing request");

    ApiError::bad_request(message).into_response()
}
