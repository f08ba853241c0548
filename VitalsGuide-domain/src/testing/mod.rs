// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use vitals_guide_data::repository::tests::MockVitalsRepository;

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;

use crate::entities::vitals::{RiskReport, TrendSummary, VitalsReading};
use crate::health::{
    overall_status, ComponentStatus, HealthComponent, HealthServiceTrait, StoreStats, SystemHealth,
};
use crate::services::vitals::{VitalsServiceError, VitalsServiceTrait};
use crate::services::{risk, trends};

/// Mock implementation of the VitalsServiceTrait for testing
///
/// Keeps its own map of readings so it can be preloaded, and can be told
/// to fail every call with a repository error.
pub struct MockVitalsService {
    readings: RwLock<HashMap<String, Vec<VitalsReading>>>,
    should_fail: bool,
}

impl Default for MockVitalsService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockVitalsService {
    /// Create a new mock vitals service
    pub fn new() -> Self {
        Self {
            readings: RwLock::new(HashMap::new()),
            should_fail: false,
        }
    }

    /// Configure the mock to fail every operation
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Add a pre-defined reading to the mock
    pub fn with_reading(self, reading: VitalsReading) -> Self {
        self.with_readings(vec![reading])
    }

    /// Add multiple pre-defined readings to the mock, in order
    pub fn with_readings(self, readings: Vec<VitalsReading>) -> Self {
        if let Ok(mut map) = self.readings.write() {
            for reading in readings {
                map.entry(reading.patient_id.clone()).or_default().push(reading);
            }
        }
        self
    }

    fn check(&self) -> Result<(), VitalsServiceError> {
        if self.should_fail {
            Err(VitalsServiceError::RepositoryError(
                "mock is configured to fail".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn snapshot(&self, patient_id: &str) -> Result<Vec<VitalsReading>, VitalsServiceError> {
        self.check()?;
        let map = self
            .readings
            .read()
            .map_err(|e| VitalsServiceError::RepositoryError(e.to_string()))?;
        map.get(patient_id)
            .filter(|readings| !readings.is_empty())
            .cloned()
            .ok_or_else(|| VitalsServiceError::NotFound(patient_id.to_string()))
    }
}

#[async_trait]
impl VitalsServiceTrait for MockVitalsService {
    async fn save_reading(&self, reading: VitalsReading) -> Result<VitalsReading, VitalsServiceError> {
        self.check()?;
        let mut map = self
            .readings
            .write()
            .map_err(|e| VitalsServiceError::RepositoryError(e.to_string()))?;
        map.entry(reading.patient_id.clone()).or_default().push(reading.clone());
        Ok(reading)
    }

    async fn latest_reading(&self, patient_id: &str) -> Result<VitalsReading, VitalsServiceError> {
        let readings = self.snapshot(patient_id)?;
        readings
            .last()
            .cloned()
            .ok_or_else(|| VitalsServiceError::NotFound(patient_id.to_string()))
    }

    async fn all_readings(&self, patient_id: &str) -> Result<Vec<VitalsReading>, VitalsServiceError> {
        self.snapshot(patient_id)
    }

    async fn trend(&self, patient_id: &str) -> Result<TrendSummary, VitalsServiceError> {
        let readings = self.snapshot(patient_id)?;
        Ok(trends::summarize(&readings))
    }

    async fn analyze(&self, patient_id: &str) -> Result<RiskReport, VitalsServiceError> {
        let latest = self.latest_reading(patient_id).await?;
        let risks = risk::evaluate(&latest);
        Ok(RiskReport { latest, risks })
    }
}

/// Mock implementation of HealthServiceTrait with a configurable store status
#[derive(Debug)]
pub struct MockHealthService {
    store_status: Result<StoreStats, String>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a mock reporting an empty, healthy store
    pub fn new() -> Self {
        Self {
            store_status: Ok(StoreStats { patients: 0, readings: 0 }),
        }
    }

    /// Configure the mock to report an unusable store
    pub fn with_unhealthy_store(mut self) -> Self {
        self.store_status = Err("Vitals store unavailable".to_string());
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();
        components.insert("store".to_string(), crate::health::store_component(&self.store_status));
        components.insert(
            "api".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        SystemHealth {
            status: overall_status(&components),
            components,
        }
    }

    async fn check_store_status(&self) -> Result<StoreStats, String> {
        self.store_status.clone()
    }
}
