use axum::{extract::Path, Json};
use tracing::{debug, instrument};

use vitals_guide_domain::services::wellness;

use crate::entities::vitals::WellnessResponse;

/// Get a random mental wellness tip
///
/// The patient id is echoed back but not looked up.
#[utoipa::path(
    get,
    path = "/api/v1/wellness/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Wellness tip", body = WellnessResponse),
    ),
    tag = "wellness"
)]
#[instrument]
pub async fn mental_wellness(Path(patient_id): Path<String>) -> Json<WellnessResponse> {
    let tip = wellness::random_tip();
    debug!("Selected wellness tip");

    Json(WellnessResponse {
        status: "ok".to_string(),
        patient: patient_id,
        tip: tip.to_string(),
    })
}
