//! User infrastructure module
//!
//! In-memory registry and the user service that validates in front of it.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UserService, USER_NOT_FOUND};
