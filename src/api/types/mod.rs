//! API request and response types

pub mod envelope;
pub mod error;
pub mod json;

pub use envelope::{DataResponse, ServiceInfoResponse};
pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
