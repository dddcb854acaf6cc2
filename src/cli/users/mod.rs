//! Users command - runs the in-memory users API

use crate::api::{create_users_app, AppState};

use super::server::{bootstrap, serve};
use super::ServeArgs;

/// Run the users API server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let (config, metrics) = bootstrap(&args);

    let state = AppState::new(&config);
    let app = create_users_app(state, &config, metrics);

    serve(app, &config, "users API").await
}
