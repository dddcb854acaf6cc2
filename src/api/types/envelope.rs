//! Success envelopes for the users API

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;

/// `{"success": true, "data": ..., "count": n}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Answer for any request the users API has no route for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub environment: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfoResponse {
    pub fn from_config(service: &ServiceConfig) -> Self {
        let endpoints = [
            ("POST /users", "Create a new user"),
            ("GET /users", "Get all users"),
            ("GET /users/:id", "Get user by ID"),
        ]
        .into_iter()
        .map(|(route, description)| (route.to_string(), description.to_string()))
        .collect();

        Self {
            success: true,
            message: format!("{} in-memory user API", service.name),
            version: service.version.clone(),
            environment: service.environment.clone(),
            endpoints,
        }
    }
}
