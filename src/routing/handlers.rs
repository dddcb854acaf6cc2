//! Route handlers for the routing demo
//!
//! Every handler echoes the full parameter bag back as `all_parameters`
//! alongside whatever it extracted for its own route.

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::params::{path_segments, RequestParams};
use super::table::RouteResponse;

const DEFAULT_LIMIT: i64 = 10;
const DEFAULT_OFFSET: i64 = 0;

/// Echoed as a string: the query value itself is a string when present
const DEFAULT_PAGE: &str = "1";

fn all_parameters(params: &RequestParams) -> Value {
    serde_json::to_value(params).unwrap_or_default()
}

pub fn home(params: &RequestParams) -> RouteResponse {
    RouteResponse::ok(json!({
        "message": "Welcome to Rust Routing Demo",
        "all_parameters": all_parameters(params),
        "available_routes": {
            "GET /": "This home page",
            "GET /users": "List all users (supports ?limit=N&offset=N)",
            "GET /users/:id": "Get user by ID",
            "POST /users": "Create user (send JSON body)",
            "GET /products/:id/reviews/:reviewId": "Get product review",
            "GET /search": "Search (supports ?q=query&category=cat&sort=asc)",
            "GET /api/v1/*": "API version 1 endpoints",
            "GET /api/v2/*": "API version 2 endpoints"
        }
    }))
}

pub fn get_user(params: &RequestParams) -> RouteResponse {
    let user_id = params.path_param(1);
    let label = user_id.map(ToString::to_string).unwrap_or_else(|| "null".to_string());

    RouteResponse::ok(json!({
        "route": "GET /users/:id",
        "message": format!("Getting user with ID: {}", label),
        "all_parameters": all_parameters(params),
        "extracted_data": {
            "user_id": user_id,
            "query_filters": params.query_params
        }
    }))
}

pub fn list_users(params: &RequestParams) -> RouteResponse {
    let limit = query_int(params, "limit").unwrap_or(DEFAULT_LIMIT);
    let offset = query_int(params, "offset").unwrap_or(DEFAULT_OFFSET);

    RouteResponse::ok(json!({
        "route": "GET /users",
        "message": "Listing users",
        "all_parameters": all_parameters(params),
        "pagination": {
            "limit": limit,
            "offset": offset
        }
    }))
}

pub fn create_user(params: &RequestParams) -> RouteResponse {
    RouteResponse::new(
        StatusCode::CREATED,
        json!({
            "route": "POST /users",
            "message": "Creating new user",
            "all_parameters": all_parameters(params),
            "received_body": params.body_params
        }),
    )
}

/// `product_id` and `review_id` are the raw 2nd and 4th segments
pub fn product_review(params: &RequestParams) -> RouteResponse {
    let segments = path_segments(&params.path);
    let product_id = segments.get(1).copied();
    let review_id = segments.get(3).copied();

    RouteResponse::ok(json!({
        "route": "GET /products/:id/reviews/:reviewId",
        "message": format!(
            "Getting review {} for product {}",
            review_id.unwrap_or("null"),
            product_id.unwrap_or("null")
        ),
        "all_parameters": all_parameters(params),
        "extracted_data": {
            "product_id": product_id,
            "review_id": review_id
        }
    }))
}

pub fn search(params: &RequestParams) -> RouteResponse {
    RouteResponse::ok(json!({
        "route": "GET /search",
        "message": "Performing search",
        "all_parameters": all_parameters(params),
        "search_params": {
            "query": params.query("q").unwrap_or(""),
            "category": params.query("category").unwrap_or("all"),
            "sort": params.query("sort").unwrap_or("relevance"),
            "page": params.query("page").unwrap_or(DEFAULT_PAGE)
        }
    }))
}

pub fn api_v1(params: &RequestParams) -> RouteResponse {
    api_version(params, "v1")
}

pub fn api_v2(params: &RequestParams) -> RouteResponse {
    api_version(params, "v2")
}

fn api_version(params: &RequestParams, version: &str) -> RouteResponse {
    RouteResponse::ok(json!({
        "route": format!("GET /api/{}/*", version),
        "message": format!("API Version {} endpoint", &version[1..]),
        "all_parameters": all_parameters(params),
        "api_version": version
    }))
}

pub fn not_found(params: &RequestParams) -> RouteResponse {
    RouteResponse::new(
        StatusCode::NOT_FOUND,
        json!({
            "error": "Route not found",
            "message": format!("No handler for {} {}", params.method, params.path),
            "all_parameters": all_parameters(params)
        }),
    )
}

fn query_int(params: &RequestParams, key: &str) -> Option<i64> {
    params.query(key).and_then(|v| v.trim().parse().ok())
}
