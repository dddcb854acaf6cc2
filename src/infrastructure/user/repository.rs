//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// Registry contents: users keyed by id plus the next id to hand out
#[derive(Debug)]
struct Registry {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: UserId::FIRST,
        }
    }
}

/// In-memory implementation of UserRepository
///
/// Lives as long as the owning server; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    registry: Arc<RwLock<Registry>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let registry = self.registry.read().await;
        Ok(registry.users.get(&id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut registry = self.registry.write().await;

        let id = registry.next_id;
        let user = User::from_new(id, new_user);
        registry.users.insert(id, user.clone());
        registry.next_id = id.next();

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let registry = self.registry.read().await;
        Ok(registry.users.values().cloned().collect())
    }
}
