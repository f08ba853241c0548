use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use tracing::{info, instrument};
use validator::Validate;

use vitals_guide_domain::entities::vitals::Alert;
use vitals_guide_domain::services::dispatch_alert;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::entities::vitals::{AlertResponse, SendAlertRequest};

/// Raise an SOS alert for a patient
///
/// The configured notifier only logs the alert; no SMS or email is sent.
#[utoipa::path(
    post,
    path = "/api/v1/send_alert",
    request_body = SendAlertRequest,
    responses(
        (status = 200, description = "Alert acknowledged", body = AlertResponse),
        (status = 400, description = "Empty patient id", body = ErrorResponse),
        (status = 500, description = "Alert could not be dispatched", body = ErrorResponse),
    ),
    tag = "alerts"
)]
#[instrument(skip(state, request))]
pub async fn send_alert(
    State(state): State<AppState>,
    Json(request): Json<SendAlertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    info!("SOS alert requested for patient {}", request.patient_id);

    let alert = Alert {
        patient_id: request.patient_id,
        message: request.message,
    };
    let receipt = dispatch_alert(state.notifier.as_ref(), alert).await?;

    Ok(Json(AlertResponse {
        status: "alert_sent".to_string(),
        to: receipt.patient_id,
        message: receipt.message,
        alert_id: receipt.alert_id,
        sent_at: receipt.sent_at,
    }))
}
