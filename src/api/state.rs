//! Application state for shared services

use std::sync::Arc;

use crate::config::{AppConfig, ServiceConfig};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{CreateUserRequest, InMemoryUserRepository, UserService};
use crate::routing::RouteTable;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub service: ServiceConfig,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    /// State backed by a fresh, empty registry
    pub fn new(config: &AppConfig) -> Self {
        let repository = Arc::new(InMemoryUserRepository::new());

        Self {
            user_service: Arc::new(UserService::new(repository)),
            service: config.service.clone(),
            routes: Arc::new(RouteTable::demo()),
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn get(&self, id: UserId) -> Result<User, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }
}
