//! Serverless HTTP demos
//!
//! Two small services behind one binary:
//! - an in-memory users API with validation and sequential ids
//! - a routing demo that dispatches on an ordered predicate table and echoes
//!   every request parameter back

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod routing;

pub use crate::config::AppConfig;
