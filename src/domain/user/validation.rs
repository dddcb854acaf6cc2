//! User validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Invalid name: must be between 2 and 100 characters")]
    InvalidName,

    #[error("Invalid email format")]
    InvalidEmail,
}

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Check a display name
///
/// Length is counted in characters, not bytes, and both bounds are inclusive.
pub fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len)
}

/// Check the shape of an email address
///
/// Only the `local@domain.tld` shape is checked; no DNS or mailbox lookup.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidName)
    }
}

pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_boundaries() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("A"));
        assert!(is_valid_name("Al"));
        assert!(is_valid_name(&"a".repeat(100)));
        assert!(!is_valid_name(&"a".repeat(101)));
    }

    #[test]
    fn test_name_counts_characters() {
        // 2 characters, 4 bytes
        assert!(is_valid_name("éé"));
        assert!(is_valid_name(&"é".repeat(100)));
        assert!(!is_valid_name(&"é".repeat(101)));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b.co "));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            validate_name("A").unwrap_err().to_string(),
            "Invalid name: must be between 2 and 100 characters"
        );
        assert_eq!(
            validate_email("nope").unwrap_err().to_string(),
            "Invalid email format"
        );
        assert!(validate_name("Al").is_ok());
        assert!(validate_email("a@b.c").is_ok());
    }
}
