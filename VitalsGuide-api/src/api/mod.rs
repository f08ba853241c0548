pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::Router;

use crate::config::ServerConfig;

/// Create the application router for the given configuration
pub async fn create_application(config: &ServerConfig) -> Router {
    routes::create_app_for_environment(&config.environment)
}
