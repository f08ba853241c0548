use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use indexmap::IndexMap;
use tracing::{info, instrument};
use validator::Validate;

use vitals_guide_domain::entities::vitals::{FieldTrend, VitalsReading};
use vitals_guide_domain::services::VitalsServiceTrait;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::entities::vitals::{
    AnalyzeResponse, FieldTrendPayload, LatestVitalsResponse, SaveVitalsResponse, TrendResponse,
    VitalsReadingPayload,
};

/// Store a new vitals reading for a patient
#[utoipa::path(
    post,
    path = "/api/v1/save_vitals",
    request_body = VitalsReadingPayload,
    responses(
        (status = 201, description = "Reading stored", body = SaveVitalsResponse),
        (status = 400, description = "Empty patient id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state, request))]
pub async fn save_vitals(
    State(state): State<AppState>,
    Json(request): Json<VitalsReadingPayload>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;
    info!("Saving vitals reading for patient {}", request.patient_id);

    let saved = state.vitals.save_reading(convert_to_domain_reading(request)).await?;

    let response = SaveVitalsResponse {
        status: "success".to_string(),
        saved: convert_to_public_reading(saved),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get the most recently saved reading for a patient
#[utoipa::path(
    get,
    path = "/api/v1/get_vitals/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Latest reading found", body = LatestVitalsResponse),
        (status = 404, description = "No readings for patient", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn get_vitals(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Fetching latest vitals");

    let latest = state.vitals.latest_reading(&patient_id).await?;

    Ok(Json(LatestVitalsResponse {
        status: "found".to_string(),
        latest: convert_to_public_reading(latest),
    }))
}

/// Get per-field trend statistics over a patient's full record
#[utoipa::path(
    get,
    path = "/api/v1/trend/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Trend statistics", body = TrendResponse),
        (status = 404, description = "No readings for patient", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn vitals_trend(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Computing vitals trend");

    let summary = state.vitals.trend(&patient_id).await?;

    let trends: IndexMap<String, FieldTrendPayload> = summary
        .trends
        .into_iter()
        .map(|(field, trend)| (field.as_str().to_string(), convert_to_public_trend(trend)))
        .collect();

    Ok(Json(TrendResponse {
        status: "ok".to_string(),
        trends,
        records: summary.records,
    }))
}

/// Evaluate health risk flags for a patient's latest reading
#[utoipa::path(
    get,
    path = "/api/v1/analyze/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Risk analysis", body = AnalyzeResponse),
        (status = 404, description = "No readings for patient", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(state))]
pub async fn analyze_health(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Analyzing health risks");

    let report = state.vitals.analyze(&patient_id).await?;

    Ok(Json(AnalyzeResponse {
        status: "ok".to_string(),
        latest: convert_to_public_reading(report.latest),
        risks: report.risks.iter().map(|flag| flag.message().to_string()).collect(),
    }))
}

// Convert public reading to domain reading
fn convert_to_domain_reading(payload: VitalsReadingPayload) -> VitalsReading {
    VitalsReading {
        patient_id: payload.patient_id,
        heart_rate: payload.heart_rate,
        systolic_bp: payload.systolic_bp,
        diastolic_bp: payload.diastolic_bp,
        blood_oxygen_pct: payload.blood_oxygen_pct,
        steps: payload.steps,
        sleep_hours: payload.sleep_hours,
        blood_sugar: payload.blood_sugar,
    }
}

// Convert domain reading to public reading
fn convert_to_public_reading(reading: VitalsReading) -> VitalsReadingPayload {
    VitalsReadingPayload {
        patient_id: reading.patient_id,
        heart_rate: reading.heart_rate,
        systolic_bp: reading.systolic_bp,
        diastolic_bp: reading.diastolic_bp,
        blood_oxygen_pct: reading.blood_oxygen_pct,
        steps: reading.steps,
        sleep_hours: reading.sleep_hours,
        blood_sugar: reading.blood_sugar,
    }
}

fn convert_to_public_trend(trend: FieldTrend) -> FieldTrendPayload {
    FieldTrendPayload {
        average: trend.average,
        min: trend.min,
        max: trend.max,
        last: trend.last,
    }
}
