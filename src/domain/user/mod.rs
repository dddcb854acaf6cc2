//! User domain
//!
//! Domain types and traits for the in-memory user API: the user entity,
//! name/email validation and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId};
pub use repository::UserRepository;
pub use validation::{
    is_valid_email, is_valid_name, validate_email, validate_name, UserValidationError,
    MAX_NAME_LENGTH, MIN_NAME_LENGTH,
};
