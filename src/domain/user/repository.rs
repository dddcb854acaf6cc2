//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations own id allocation: `create` assigns the next id and
/// stores the user as one step, so ids stay unique and sequential.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Allocate an id and store a new user
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// List all users in creation order
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
