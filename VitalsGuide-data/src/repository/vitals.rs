use tracing::debug;
use async_trait::async_trait;

use crate::models::vitals::VitalsRecord;
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for vitals readings
#[async_trait]
pub trait VitalsRepositoryTrait {
    /// Append a reading to its patient's record
    async fn save(&self, record: VitalsRecord) -> Result<VitalsRecord, RepositoryError>;

    /// Get the most recently appended reading for a patient
    async fn latest(&self, patient_id: &str) -> Result<Option<VitalsRecord>, RepositoryError>;

    /// Get the full record for a patient in append order
    async fn all(&self, patient_id: &str) -> Result<Option<Vec<VitalsRecord>>, RepositoryError>;

    /// Number of patients with at least one reading
    async fn patient_count(&self) -> Result<usize, RepositoryError>;

    /// Total number of stored readings
    async fn reading_count(&self) -> Result<usize, RepositoryError>;
}

/// Repository for vitals readings.
/// Clones are handles onto the same store; `new` always starts empty.
#[derive(Debug, Clone, Default)]
pub struct VitalsRepository {
    storage: InMemoryStorage,
}

impl VitalsRepository {
    /// Create a new repository with an empty store
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl VitalsRepositoryTrait for VitalsRepository {
    async fn save(&self, record: VitalsRecord) -> Result<VitalsRecord, RepositoryError> {
        debug!("Appending vitals reading for patient {}", record.patient_id);
        self.storage.append(&record).await
    }

    async fn latest(&self, patient_id: &str) -> Result<Option<VitalsRecord>, RepositoryError> {
        debug!("Getting latest vitals reading for patient {}", patient_id);
        self.storage.latest(patient_id).await
    }

    async fn all(&self, patient_id: &str) -> Result<Option<Vec<VitalsRecord>>, RepositoryError> {
        debug!("Getting all vitals readings for patient {}", patient_id);
        self.storage.all(patient_id).await
    }

    async fn patient_count(&self) -> Result<usize, RepositoryError> {
        self.storage.patient_count().await
    }

    async fn reading_count(&self) -> Result<usize, RepositoryError> {
        self.storage.reading_count().await
    }
}

/// Mock vitals repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Mock implementation of VitalsRepositoryTrait that can be told to fail
    pub struct MockVitalsRepository {
        inner: VitalsRepository,
        should_fail: bool,
    }

    impl Default for MockVitalsRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockVitalsRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self {
                inner: VitalsRepository::new(),
                should_fail: false,
            }
        }

        /// Create a mock repository whose every call fails with a lock error
        pub fn failing() -> Self {
            Self {
                inner: VitalsRepository::new(),
                should_fail: true,
            }
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.should_fail {
                Err(RepositoryError::Lock("mock repository is configured to fail".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl VitalsRepositoryTrait for MockVitalsRepository {
        async fn save(&self, record: VitalsRecord) -> Result<VitalsRecord, RepositoryError> {
            self.check()?;
            self.inner.save(record).await
        }

        async fn latest(&self, patient_id: &str) -> Result<Option<VitalsRecord>, RepositoryError> {
            self.check()?;
            self.inner.latest(patient_id).await
        }

        async fn all(&self, patient_id: &str) -> Result<Option<Vec<VitalsRecord>>, RepositoryError> {
            self.check()?;
            self.inner.all(patient_id).await
        }

        async fn patient_count(&self) -> Result<usize, RepositoryError> {
            self.check()?;
            self.inner.patient_count().await
        }

        async fn reading_count(&self) -> Result<usize, RepositoryError> {
            self.check()?;
            self.inner.reading_count().await
        }
    }
}
