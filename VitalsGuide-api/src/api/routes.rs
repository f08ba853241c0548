use axum::{
    http::{header, Method},
    routing::{get, post},
    Extension, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use vitals_guide_data::repository::VitalsRepository;
use crate::api::handlers::{alerts, health, vitals, wellness};
use crate::api::handlers::health::{AppEnvironment, SharedHealthService};
use crate::api::state::AppState;
use crate::config::ServerConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router for the default environment
///
/// Every call builds a fresh store, so two apps never share readings.
pub async fn create_app() -> Router {
    create_app_for_environment(ServerConfig::DEFAULT_ENVIRONMENT)
}

/// Create the application router reporting the given environment on `/health`
pub fn create_app_for_environment(environment: &str) -> Router {
    debug!("Creating application router for {}", environment);

    let repository = VitalsRepository::new();
    let state = AppState::with_repository(repository.clone());
    let health_service = health::create_health_service(repository);

    create_app_with_state(state, health_service, environment)
}

/// Create the application router over explicit collaborators
pub fn create_app_with_state(
    state: AppState,
    health_service: SharedHealthService,
    environment: &str,
) -> Router {
    let api_routes = Router::new()
        .route("/save_vitals", post(vitals::save_vitals))
        .route("/get_vitals/:patient_id", get(vitals::get_vitals))
        .route("/trend/:patient_id", get(vitals::vitals_trend))
        .route("/analyze/:patient_id", get(vitals::analyze_health))
        .route("/send_alert", post(alerts::send_alert))
        .route("/wellness/:patient_id", get(wellness::mental_wellness));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(AppEnvironment(environment.to_string())));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(state);

    debug!("API routes nested");

    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    // Initialize health check service startup time
    health::initialize_server_start_time();
    debug!("Health check service initialized");

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
