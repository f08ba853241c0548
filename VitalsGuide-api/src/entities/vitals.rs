use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use vitals_guide_domain::entities::vitals::Measurement;

/// Reject ids that are empty or only whitespace
fn validate_patient_id(patient_id: &str) -> Result<(), ValidationError> {
    if patient_id.trim().is_empty() {
        let mut error = ValidationError::new("patient_id");
        error.message = Some("patient_id must not be empty".into());
        return Err(error);
    }
    Ok(())
}

/// Public representation of a vitals reading
///
/// Values are not range-checked; only the patient id must be non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct VitalsReadingPayload {
    /// Patient identifier
    #[validate(custom = "validate_patient_id")]
    #[schema(example = "patient-001")]
    pub patient_id: String,

    /// Heart rate in beats per minute (alias: `hr`)
    #[serde(alias = "hr")]
    pub heart_rate: i64,

    /// Systolic blood pressure (alias: `bp_sys`)
    #[serde(alias = "bp_sys")]
    pub systolic_bp: i64,

    /// Diastolic blood pressure (alias: `bp_dia`)
    #[serde(alias = "bp_dia")]
    pub diastolic_bp: i64,

    /// Blood oxygen saturation percentage (alias: `spo2`)
    #[serde(alias = "spo2")]
    pub blood_oxygen_pct: i64,

    /// Step count
    pub steps: i64,

    /// Hours slept; omitted or null when not measured
    #[serde(default)]
    pub sleep_hours: Option<f64>,

    /// Blood sugar; omitted or null when not measured (alias: `sugar`)
    #[serde(default, alias = "sugar")]
    pub blood_sugar: Option<f64>,
}

/// Response for a stored reading
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveVitalsResponse {
    /// Always "success"
    pub status: String,
    /// The reading as stored
    pub saved: VitalsReadingPayload,
}

/// Response carrying a patient's latest reading
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LatestVitalsResponse {
    /// Always "found"
    pub status: String,
    pub latest: VitalsReadingPayload,
}

/// Statistics for one field
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldTrendPayload {
    /// Mean of present values, rounded half-to-even to 2 decimals
    pub average: f64,
    /// Smallest present value, in the field's native type
    #[schema(value_type = f64)]
    pub min: Measurement,
    /// Largest present value, in the field's native type
    #[schema(value_type = f64)]
    pub max: Measurement,
    /// Last present value in save order
    #[schema(value_type = f64)]
    pub last: Measurement,
}

/// Trend statistics for a patient
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrendResponse {
    /// Always "ok"
    pub status: String,
    /// Field name to statistics; fields never measured are omitted
    #[schema(value_type = Object)]
    pub trends: IndexMap<String, FieldTrendPayload>,
    /// Number of readings in the patient's record
    pub records: usize,
}

/// Latest reading and the risk flags it triggers
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Always "ok"
    pub status: String,
    pub latest: VitalsReadingPayload,
    /// Risk labels in rule order; "No critical risks detected" when none apply
    pub risks: Vec<String>,
}

/// SOS alert request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendAlertRequest {
    /// Patient the alert concerns
    #[validate(custom = "validate_patient_id")]
    pub patient_id: String,
    /// Free-text alert message
    pub message: String,
}

/// Acknowledgement of an SOS alert
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AlertResponse {
    /// Always "alert_sent"
    pub status: String,
    /// Patient the alert was raised for
    pub to: String,
    pub message: String,
    pub alert_id: Uuid,
    pub sent_at: DateTime<Utc>,
}

/// A wellness tip for a patient
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WellnessResponse {
    /// Always "ok"
    pub status: String,
    pub patient: String,
    pub tip: String,
}
