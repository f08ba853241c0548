use std::sync::PoisonError;
use thiserror::Error;

/// Error type for repository operations
///
/// Missing patients are not errors at this layer; lookups return `Ok(None)`.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The store lock was poisoned by a panicking writer
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}
