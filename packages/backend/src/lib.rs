pub mod auth;
pub mod config;
pub mod db;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{Config, ConfigError};
use crate::state::AppState;

pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Builds the app from process environment, the way the binary does.
pub fn create_default_app() -> Result<axum::Router, ConfigError> {
    let config = Config::from_env();
    let state = AppState::from_config(&config)?;
    Ok(create_app(state))
}
