//! Routing command - runs the routing demo

use crate::api::{create_routing_app, AppState};

use super::server::{bootstrap, serve};
use super::ServeArgs;

/// Run the routing demo server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let (config, metrics) = bootstrap(&args);

    let state = AppState::new(&config);
    let app = create_routing_app(state, &config, metrics);

    serve(app, &config, "routing demo").await
}
