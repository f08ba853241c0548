use thiserror::Error;
use tracing::{debug, error};
use async_trait::async_trait;

use crate::entities::conversions;
use crate::entities::vitals::{RiskReport, TrendSummary, VitalsReading};
use crate::services::{risk, trends};
use vitals_guide_data::repository::{RepositoryError, VitalsRepository, VitalsRepositoryTrait};

/// Vitals service errors
#[derive(Debug, Error)]
pub enum VitalsServiceError {
    /// No reading has ever been saved for the patient
    #[error("No vitals found for patient {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl VitalsServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, VitalsServiceError::NotFound(_))
    }
}

/// Trait for vitals service operations
#[async_trait]
pub trait VitalsServiceTrait {
    /// Append a reading to the patient's record and echo it back
    async fn save_reading(&self, reading: VitalsReading) -> Result<VitalsReading, VitalsServiceError>;

    /// Most recently saved reading for a patient
    async fn latest_reading(&self, patient_id: &str) -> Result<VitalsReading, VitalsServiceError>;

    /// Every reading for a patient in save order
    async fn all_readings(&self, patient_id: &str) -> Result<Vec<VitalsReading>, VitalsServiceError>;

    /// Trend statistics over the patient's full record
    async fn trend(&self, patient_id: &str) -> Result<TrendSummary, VitalsServiceError>;

    /// Risk flags for the patient's latest reading
    async fn analyze(&self, patient_id: &str) -> Result<RiskReport, VitalsServiceError>;
}

/// Vitals service for domain logic
pub struct VitalsService<R: VitalsRepositoryTrait> {
    repository: R,
}

impl<R: VitalsRepositoryTrait> VitalsService<R> {
    /// Create a new vitals service over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> VitalsServiceError {
        error!("Vitals repository failure: {}", err);
        VitalsServiceError::RepositoryError(err.to_string())
    }
}

#[async_trait]
impl<R: VitalsRepositoryTrait + Send + Sync> VitalsServiceTrait for VitalsService<R> {
    async fn save_reading(&self, reading: VitalsReading) -> Result<VitalsReading, VitalsServiceError> {
        let record = conversions::convert_to_data_record(&reading);

        let stored = self.repository.save(record)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Ok(conversions::convert_to_domain_reading(stored))
    }

    async fn latest_reading(&self, patient_id: &str) -> Result<VitalsReading, VitalsServiceError> {
        let record = self.repository.latest(patient_id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| VitalsServiceError::NotFound(patient_id.to_string()))?;

        Ok(conversions::convert_to_domain_reading(record))
    }

    async fn all_readings(&self, patient_id: &str) -> Result<Vec<VitalsReading>, VitalsServiceError> {
        let records = self.repository.all(patient_id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| VitalsServiceError::NotFound(patient_id.to_string()))?;

        Ok(records
            .into_iter()
            .map(conversions::convert_to_domain_reading)
            .collect())
    }

    async fn trend(&self, patient_id: &str) -> Result<TrendSummary, VitalsServiceError> {
        let readings = self.all_readings(patient_id).await?;
        debug!("Summarizing {} readings for patient {}", readings.len(), patient_id);
        Ok(trends::summarize(&readings))
    }

    async fn analyze(&self, patient_id: &str) -> Result<RiskReport, VitalsServiceError> {
        let latest = self.latest_reading(patient_id).await?;
        let risks = risk::evaluate(&latest);
        debug!("Patient {} has {} risk flag(s)", patient_id, risks.len());
        Ok(RiskReport { latest, risks })
    }
}

/// Create a vitals service backed by the given repository handle
pub fn create_vitals_service(repository: VitalsRepository) -> impl VitalsServiceTrait + Send + Sync {
    VitalsService::new(repository)
}

/// Create a vitals service with a fresh, empty store
pub fn create_default_vitals_service() -> impl VitalsServiceTrait + Send + Sync {
    create_vitals_service(VitalsRepository::new())
}

/// Create a mock vitals service for testing
#[cfg(feature = "mock")]
pub fn create_mock_vitals_service() -> impl VitalsServiceTrait + Send + Sync {
    crate::testing::MockVitalsService::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::vitals::{Measurement, RiskFlag, VitalField};
    use vitals_guide_data::repository::tests::MockVitalsRepository;

    fn reading(patient_id: &str, heart_rate: i64, sleep_hours: Option<f64>) -> VitalsReading {
        VitalsReading {
            patient_id: patient_id.to_string(),
            heart_rate,
            systolic_bp: 120,
            diastolic_bp: 80,
            blood_oxygen_pct: 98,
            steps: 6000,
            sleep_hours,
            blood_sugar: None,
        }
    }

    #[tokio::test]
    async fn test_unknown_patient_is_not_found_everywhere() {
        let service = VitalsService::new(MockVitalsRepository::new());

        assert!(service.latest_reading("ghost").await.unwrap_err().is_not_found());
        assert!(service.all_readings("ghost").await.unwrap_err().is_not_found());
        assert!(service.trend("ghost").await.unwrap_err().is_not_found());
        assert!(service.analyze("ghost").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_save_echoes_reading() {
        let service = VitalsService::new(MockVitalsRepository::new());
        let saved = service.save_reading(reading("p1", 72, Some(7.0))).await.unwrap();
        assert_eq!(saved, reading("p1", 72, Some(7.0)));
    }

    #[tokio::test]
    async fn test_latest_is_nth_of_n_saves() {
        let service = VitalsService::new(MockVitalsRepository::new());
        for hr in [60, 65, 70, 75] {
            service.save_reading(reading("p1", hr, None)).await.unwrap();
        }

        let all = service.all_readings("p1").await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all.iter().map(|r| r.heart_rate).collect::<Vec<_>>(), vec![60, 65, 70, 75]);
        assert_eq!(service.latest_reading("p1").await.unwrap().heart_rate, 75);
    }

    #[tokio::test]
    async fn test_trend_over_stored_record() {
        let service = VitalsService::new(MockVitalsRepository::new());
        service.save_reading(reading("p1", 60, Some(5.0))).await.unwrap();
        service.save_reading(reading("p1", 80, Some(9.0))).await.unwrap();
        service.save_reading(reading("p1", 70, None)).await.unwrap();

        let summary = service.trend("p1").await.unwrap();
        assert_eq!(summary.records, 3);
        assert_eq!(summary.trends[&VitalField::HeartRate].last, Measurement::Int(70));
        assert_eq!(summary.trends[&VitalField::SleepHours].last, Measurement::Float(9.0));
        assert!(!summary.trends.contains_key(&VitalField::BloodSugar));
    }

    #[tokio::test]
    async fn test_analyze_uses_latest_reading_only() {
        let service = VitalsService::new(MockVitalsRepository::new());
        service.save_reading(reading("p1", 130, Some(4.0))).await.unwrap();
        service.save_reading(reading("p1", 70, Some(8.0))).await.unwrap();

        let report = service.analyze("p1").await.unwrap();
        assert_eq!(report.latest.heart_rate, 70);
        assert_eq!(report.risks, vec![RiskFlag::NoCriticalRisks]);
    }

    #[tokio::test]
    async fn test_repository_failure_is_not_not_found() {
        let service = VitalsService::new(MockVitalsRepository::failing());

        let err = service.latest_reading("p1").await.unwrap_err();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("Repository error"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_through_shared_service() {
        let service = std::sync::Arc::new(create_default_vitals_service());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move { service.save_reading(reading("p1", i, None)).await })
            })
            .collect();

        for result in futures::future::join_all(handles).await {
            result.unwrap().unwrap();
        }

        assert_eq!(service.all_readings("p1").await.unwrap().len(), 50);
    }
}
