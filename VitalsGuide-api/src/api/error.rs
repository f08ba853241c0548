use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

use vitals_guide_domain::services::{AlertError, VitalsServiceError};
use crate::entities::common::ErrorResponse;

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// No readings exist for the requested patient
    #[error("No vitals found for patient {0}")]
    NotFound(String),

    /// Request body failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Anything else; details are logged, not returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<VitalsServiceError> for ApiError {
    fn from(err: VitalsServiceError) -> Self {
        match err {
            VitalsServiceError::NotFound(patient_id) => ApiError::NotFound(patient_id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AlertError> for ApiError {
    fn from(err: AlertError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let msgs: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid {}", field))
                    })
                    .collect();
                format!("{}: {}", field, msgs.join(", "))
            })
            .collect::<Vec<String>>()
            .join("; ");
        ApiError::Validation(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(patient_id) => ErrorResponse::not_found(&patient_id).into_response(),
            ApiError::Validation(message) => {
                warn!("Rejected request: {}", message);
                ErrorResponse::validation_error(&message, None).into_response()
            }
            ApiError::Internal(message) => {
                error!("Request failed: {}", message);
                ErrorResponse::internal_error().into_response()
            }
        }
    }
}
