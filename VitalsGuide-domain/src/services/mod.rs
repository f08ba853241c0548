pub mod alerts;
pub mod risk;
pub mod trends;
pub mod vitals;
pub mod wellness;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use alerts::{dispatch_alert, AlertError, AlertNotifier, LogOnlyNotifier};
pub use vitals::{
    create_default_vitals_service, create_vitals_service, VitalsServiceError, VitalsServiceTrait,
};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use vitals::create_mock_vitals_service;
