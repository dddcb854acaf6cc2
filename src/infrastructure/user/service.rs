//! User service for the in-memory user API

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::user::{validate_email, validate_name, NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

pub const USER_NOT_FOUND: &str = "User not found";

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// User service: validation in front of the registry
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user
    ///
    /// The name is checked before the email, so a request with both invalid
    /// reports the name. Nothing is allocated unless both pass.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        if let Err(e) = validate_name(&request.name) {
            warn!(name = %request.name, "Invalid name provided");
            return Err(DomainError::validation(e.to_string()));
        }

        if let Err(e) = validate_email(&request.email) {
            warn!(email = %request.email, "Invalid email provided");
            return Err(DomainError::validation(e.to_string()));
        }

        let user = self
            .repository
            .create(NewUser {
                name: request.name,
                email: request.email,
            })
            .await?;

        info!(user_id = %user.id(), "User created successfully");
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }
}
