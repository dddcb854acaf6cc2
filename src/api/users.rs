//! In-memory users API endpoints

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::Value;

use crate::domain::user::{User, UserId};
use crate::infrastructure::user::CreateUserRequest;

use super::state::AppState;
use super::types::{ApiError, DataResponse, Json, ServiceInfoResponse};

/// Create the users router
///
/// Unmatched methods on known paths and unknown paths alike answer with the
/// service info document.
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users).post(create_user).fallback(service_info),
        )
        .route("/users/{*id}", get(get_user).fallback(service_info))
        .fallback(service_info)
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<DataResponse<User>>), ApiError> {
    let request = CreateUserRequest {
        name: string_field(&body, "name"),
        email: string_field(&body, "email"),
    };

    let user = state.user_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(user))))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<User>>>, ApiError> {
    let users = state.user_service.list().await?;
    let count = users.len();

    Ok(Json(DataResponse::new(users).with_count(count)))
}

/// GET /users/{id}
///
/// The id is the last non-empty path segment; anything but a positive
/// integer is reported the same way as an unknown id.
pub async fn get_user(
    State(state): State<AppState>,
    Path(rest): Path<String>,
) -> Result<Json<DataResponse<User>>, ApiError> {
    let raw_id = rest.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    let id = UserId::parse(raw_id).ok_or_else(ApiError::user_not_found)?;

    let user = state.user_service.get(id).await?;

    Ok(Json(DataResponse::new(user)))
}

/// Fallback for everything not routed above
pub async fn service_info(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method == Method::GET && uri.path().starts_with("/users/") {
        return ApiError::user_not_found().into_response();
    }

    Json(ServiceInfoResponse::from_config(&state.service)).into_response()
}

/// Missing or non-string fields become empty and fail validation
fn string_field(body: &Value, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::json;
    use tower::ServiceExt;

    fn app() -> Router {
        create_users_router().with_state(AppState::new(&AppConfig::default()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    #[tokio::test]
    async fn test_create_first_user() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Al", "email": "al@x.io"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["name"], "Al");
        assert_eq!(body["data"]["email"], "al@x.io");
        assert!(body["data"]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_create_rejects_short_name() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "A", "email": "a@x.io"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Invalid name"));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_email() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Alice", "email": "alice"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email format");
    }

    #[tokio::test]
    async fn test_create_with_missing_fields_is_invalid() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/users", Some(json!({"email": 7}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Invalid name"));
    }

    #[tokio::test]
    async fn test_create_with_malformed_body() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{oops"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_failed_create_does_not_consume_id() {
        let app = app();

        send(&app, Method::POST, "/users", Some(json!({"name": "A", "email": "a@x.io"}))).await;
        let (_, body) = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": "Bob", "email": "bob@x.io"})),
        )
        .await;

        assert_eq!(body["data"]["id"], 1);
    }

    #[tokio::test]
    async fn test_list_users_with_count() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "data": [], "count": 0}));

        for (name, email) in [("Al", "al@x.io"), ("Bea", "bea@x.io")] {
            send(&app, Method::POST, "/users", Some(json!({"name": name, "email": email}))).await;
        }

        let (_, body) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["data"][0]["id"], 1);
        assert_eq!(body["data"][1]["name"], "Bea");
    }

    #[tokio::test]
    async fn test_get_user() {
        let app = app();
        send(&app, Method::POST, "/users", Some(json!({"name": "Al", "email": "al@x.io"}))).await;

        let (status, body) = send(&app, Method::GET, "/users/1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Al");
        assert!(body.get("count").is_none());
    }

    #[tokio::test]
    async fn test_get_user_with_trailing_slash() {
        let app = app();
        send(&app, Method::POST, "/users", Some(json!({"name": "Al", "email": "al@x.io"}))).await;

        let (status, body) = send(&app, Method::GET, "/users/1/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], 1);
    }

    #[tokio::test]
    async fn test_get_unknown_or_malformed_user() {
        let app = app();

        for uri in ["/users/999", "/users/abc", "/users/0", "/users/", "/users/1/extra"] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({"success": false, "error": "User not found"}));
        }
    }

    #[tokio::test]
    async fn test_unrouted_requests_get_service_info() {
        let app = app();

        for (method, uri) in [
            (Method::GET, "/"),
            (Method::GET, "/health"),
            (Method::DELETE, "/users"),
            (Method::POST, "/users/1"),
        ] {
            let (status, body) = send(&app, method, uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], true);
            assert_eq!(body["version"], "1.0.0");
            assert_eq!(body["environment"], "development");
            assert_eq!(body["endpoints"]["POST /users"], "Create a new user");
        }
    }
}
