//! Infrastructure layer - concrete repositories, services and observability

pub mod logging;
pub mod observability;
pub mod user;
