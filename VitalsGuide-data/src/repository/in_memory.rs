use std::sync::{Arc, Mutex};
use std::collections::HashMap;

use crate::models::vitals::VitalsRecord;
use super::errors::RepositoryError;

/// In-memory storage for vitals readings, one append-only sequence per patient
///
/// A single store-wide lock serializes appends, so concurrent saves for the
/// same patient never lose a reading. Reads clone under the same lock and
/// therefore see a consistent snapshot.
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Readings keyed by patient id, in append order
    patients: Arc<Mutex<HashMap<String, Vec<VitalsRecord>>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self {
            patients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Append a reading to its patient's sequence, creating the sequence on first save
    pub async fn append(&self, record: &VitalsRecord) -> Result<VitalsRecord, RepositoryError> {
        let mut store = self.patients.lock()?;
        store
            .entry(record.patient_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record.clone())
    }

    /// Get the most recently appended reading for a patient
    pub async fn latest(&self, patient_id: &str) -> Result<Option<VitalsRecord>, RepositoryError> {
        let store = self.patients.lock()?;
        Ok(store.get(patient_id).and_then(|records| records.last().cloned()))
    }

    /// Get every reading for a patient in append order
    pub async fn all(&self, patient_id: &str) -> Result<Option<Vec<VitalsRecord>>, RepositoryError> {
        let store = self.patients.lock()?;
        Ok(store
            .get(patient_id)
            .filter(|records| !records.is_empty())
            .cloned())
    }

    /// Number of patients with at least one reading
    pub async fn patient_count(&self) -> Result<usize, RepositoryError> {
        let store = self.patients.lock()?;
        Ok(store.len())
    }

    /// Total number of readings across all patients
    pub async fn reading_count(&self) -> Result<usize, RepositoryError> {
        let store = self.patients.lock()?;
        Ok(store.values().map(Vec::len).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(patient_id: &str, heart_rate: i64) -> VitalsRecord {
        VitalsRecord {
            patient_id: patient_id.to_string(),
            heart_rate,
            systolic_bp: 120,
            diastolic_bp: 80,
            blood_oxygen_pct: 98,
            steps: 4000,
            sleep_hours: None,
            blood_sugar: None,
        }
    }

    #[tokio::test]
    async fn test_append_creates_sequence_on_first_save() {
        let storage = InMemoryStorage::new();
        assert!(storage.all("p1").await.unwrap().is_none());

        storage.append(&record("p1", 70)).await.unwrap();

        let all = storage.all("p1").await.unwrap().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(storage.patient_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_latest_is_last_appended() {
        let storage = InMemoryStorage::new();
        storage.append(&record("p1", 70)).await.unwrap();
        storage.append(&record("p1", 90)).await.unwrap();
        storage.append(&record("p1", 60)).await.unwrap();

        let latest = storage.latest("p1").await.unwrap().unwrap();
        assert_eq!(latest.heart_rate, 60);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let storage = InMemoryStorage::new();
        let handle = storage.clone();
        handle.append(&record("p1", 70)).await.unwrap();

        assert_eq!(storage.reading_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_reported() {
        let storage = InMemoryStorage::new();
        let patients = storage.patients.clone();
        let _ = std::thread::spawn(move || {
            let _guard = patients.lock().unwrap();
            panic!("poison the store");
        })
        .join();

        let result = storage.latest("p1").await;
        assert!(matches!(result, Err(RepositoryError::Lock(_))));
    }
}
