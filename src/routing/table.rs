//! Ordered route table
//!
//! Routes are `(predicate, handler)` pairs checked top to bottom against the
//! raw method and path; the first predicate that matches wins and no later
//! route is consulted. When nothing matches the fallback handler answers.
//! Order is therefore part of the contract: `/users/` must be tried before
//! the generic prefixes below it.

use std::fmt;

use axum::http::{Method, StatusCode};
use serde_json::Value;

use super::handlers;
use super::params::RequestParams;

/// Status and JSON body produced by a route handler
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RouteResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

pub type Predicate = fn(&Method, &str) -> bool;
pub type Handler = fn(&RequestParams) -> RouteResponse;

/// A named predicate/handler pair
pub struct Route {
    name: &'static str,
    predicate: Predicate,
    handler: Handler,
}

impl Route {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, method: &Method, path: &str) -> bool {
        (self.predicate)(method, path)
    }

    pub fn handle(&self, params: &RequestParams) -> RouteResponse {
        (self.handler)(params)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("name", &self.name).finish()
    }
}

/// First-match-wins list of routes with a fallback
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Handler,
}

impl RouteTable {
    pub fn new(fallback: Handler) -> Self {
        Self {
            routes: Vec::new(),
            fallback,
        }
    }

    /// Append a route; it is checked after every route added before it
    pub fn route(mut self, name: &'static str, predicate: Predicate, handler: Handler) -> Self {
        self.routes.push(Route {
            name,
            predicate,
            handler,
        });
        self
    }

    /// The first route whose predicate accepts the request
    pub fn match_route(&self, method: &Method, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(method, path))
    }

    pub fn dispatch(&self, params: &RequestParams) -> RouteResponse {
        match self.match_route(&params.method, &params.path) {
            Some(route) => {
                tracing::debug!(route = route.name(), path = %params.path, "Route matched");
                route.handle(params)
            }
            None => {
                tracing::debug!(method = %params.method, path = %params.path, "No route matched");
                (self.fallback)(params)
            }
        }
    }

    pub fn route_names(&self) -> Vec<&'static str> {
        self.routes.iter().map(Route::name).collect()
    }

    /// The routing demo's table
    pub fn demo() -> Self {
        Self::new(handlers::not_found)
            .route("home", is_home, handlers::home)
            .route("get_user", is_get_user, handlers::get_user)
            .route("list_users", is_list_users, handlers::list_users)
            .route("create_user", is_create_user, handlers::create_user)
            .route("product_review", is_product_review, handlers::product_review)
            .route("search", is_search, handlers::search)
            .route("api_v1", is_api_v1, handlers::api_v1)
            .route("api_v2", is_api_v2, handlers::api_v2)
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.route_names())
            .finish()
    }
}

fn is_home(_: &Method, path: &str) -> bool {
    path == "/" || path.is_empty()
}

fn is_get_user(method: &Method, path: &str) -> bool {
    path.starts_with("/users/") && method == Method::GET
}

fn is_list_users(method: &Method, path: &str) -> bool {
    path == "/users" && method == Method::GET
}

fn is_create_user(method: &Method, path: &str) -> bool {
    path == "/users" && method == Method::POST
}

fn is_product_review(_: &Method, path: &str) -> bool {
    path.starts_with("/products/") && path.contains("/reviews")
}

fn is_search(_: &Method, path: &str) -> bool {
    path.starts_with("/search")
}

fn is_api_v1(_: &Method, path: &str) -> bool {
    path.starts_with("/api/v1/")
}

fn is_api_v2(_: &Method, path: &str) -> bool {
    path.starts_with("/api/v2/")
}
