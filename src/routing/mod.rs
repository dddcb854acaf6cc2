//! Routing demo
//!
//! Request flow:
//! - `params` builds the per-request parameter bag
//! - `table` picks the first route whose predicate matches
//! - `handlers` shape the status and JSON body for that route

pub mod handlers;
pub mod params;
pub mod table;

pub use params::{extract_path_params, path_segments, PathParam, RequestParams};
pub use table::{Route, RouteResponse, RouteTable};
