//! Routing demo endpoint
//!
//! Every path and method lands on one catch-all handler; the route table
//! decides what happens next.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};

use crate::routing::RequestParams;

use super::state::AppState;

/// Request bodies larger than this are treated as empty
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

pub fn create_routing_router() -> Router<AppState> {
    Router::new()
        .route("/{*path}", any(dispatch))
        .route("/", any(dispatch))
}

async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let body = match to_bytes(body, MAX_BODY_SIZE).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read request body, treating it as empty");
            Default::default()
        }
    };

    let params = RequestParams::aggregate(&parts.method, &parts.uri, &parts.headers, &body);
    let response = state.routes.dispatch(&params);

    (response.status, Json(response.body)).into_response()
}
