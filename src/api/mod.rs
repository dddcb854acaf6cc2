//! API layer - HTTP endpoints and middleware

pub mod middleware;
pub mod router;
pub mod routing_demo;
pub mod state;
pub mod types;
pub mod users;

pub use router::{create_routing_app, create_users_app};
pub use state::AppState;
