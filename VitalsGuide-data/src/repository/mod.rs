// Repository module structure
pub mod errors;
mod in_memory;
mod vitals;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryStorage;
pub use vitals::{VitalsRepository, VitalsRepositoryTrait};

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use vitals::tests;
