//! API middleware components

pub mod cors;
pub mod logging;
pub mod metrics;

pub use cors::cors_middleware;
pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
