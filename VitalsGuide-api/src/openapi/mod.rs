use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Vitals endpoints
        crate::api::handlers::vitals::save_vitals,
        crate::api::handlers::vitals::get_vitals,
        crate::api::handlers::vitals::vitals_trend,
        crate::api::handlers::vitals::analyze_health,

        // Alert and wellness endpoints
        crate::api::handlers::alerts::send_alert,
        crate::api::handlers::wellness::mental_wellness
    ),
    components(
        schemas(
            // Entities
            crate::entities::vitals::VitalsReadingPayload,
            crate::entities::vitals::SaveVitalsResponse,
            crate::entities::vitals::LatestVitalsResponse,
            crate::entities::vitals::FieldTrendPayload,
            crate::entities::vitals::TrendResponse,
            crate::entities::vitals::AnalyzeResponse,
            crate::entities::vitals::SendAlertRequest,
            crate::entities::vitals::AlertResponse,
            crate::entities::vitals::WellnessResponse,
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "vitals", description = "Vitals storage, trends and risk analysis"),
        (name = "alerts", description = "SOS alert endpoint"),
        (name = "wellness", description = "Mental wellness tips")
    ),
    info(
        title = "VitalsGuide API",
        version = "0.1.0",
        description = "API for recording patient vitals and flagging health risks",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
