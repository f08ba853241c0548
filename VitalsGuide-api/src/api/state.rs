use std::sync::Arc;

use vitals_guide_data::repository::VitalsRepository;
use vitals_guide_domain::services::{create_vitals_service, AlertNotifier, LogOnlyNotifier, VitalsServiceTrait};

/// Service type for dependency injection
pub type VitalsService = Arc<dyn VitalsServiceTrait + Send + Sync>;

/// Notifier type for dependency injection
pub type Notifier = Arc<dyn AlertNotifier>;

/// Shared state handed to every request handler
///
/// Constructed once per application; cloning shares the same store.
#[derive(Clone)]
pub struct AppState {
    pub vitals: VitalsService,
    pub notifier: Notifier,
}

impl AppState {
    /// Build state from explicit collaborators
    pub fn new(vitals: VitalsService, notifier: Notifier) -> Self {
        Self { vitals, notifier }
    }

    /// Build state over the given repository handle with the log-only notifier
    pub fn with_repository(repository: VitalsRepository) -> Self {
        Self::new(
            Arc::new(create_vitals_service(repository)),
            Arc::new(LogOnlyNotifier::new()),
        )
    }
}
