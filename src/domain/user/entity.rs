//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier - positive, assigned sequentially by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub const FIRST: UserId = UserId(1);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id allocated after this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Parse a path segment, accepting only a full base-10 number
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<u64>().ok().filter(|id| *id > 0).map(Self)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Already-validated input for a user that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// User entity
///
/// Every field is fixed at creation; there are no mutators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user stamped with the current time
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }

    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        Self::new(id, new_user.name, new_user.email)
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parse() {
        assert_eq!(UserId::parse("42"), Some(UserId::new(42)));
        assert_eq!(UserId::parse("0"), None);
        assert_eq!(UserId::parse("-1"), None);
        assert_eq!(UserId::parse("abc"), None);
        assert_eq!(UserId::parse("4x"), None);
        assert_eq!(UserId::parse(""), None);
    }

    #[test]
    fn test_user_id_next() {
        assert_eq!(UserId::FIRST.next(), UserId::new(2));
    }

    #[test]
    fn test_user_creation() {
        let before = Utc::now();
        let user = User::new(UserId::new(1), "Al", "a@b.co");

        assert_eq!(user.id().value(), 1);
        assert_eq!(user.name(), "Al");
        assert_eq!(user.email(), "a@b.co");
        assert!(user.created_at() >= before);
    }

    #[test]
    fn test_user_serialization_shape() {
        let user = User::new(UserId::new(7), "Ada", "ada@example.com");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");

        let created_at = json["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
    }
}
