//! Repository trait for mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisted short-code/long-URL mappings.
///
/// The service issues only point reads and single-row inserts through this
/// trait; transaction management stays inside the implementations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds a mapping by its original long URL.
    ///
    /// Used to check whether a URL has already been shortened, keeping
    /// repeated submissions allocation-free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Mapping>, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Mapping>, AppError>;

    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if either the short code or the long
    /// URL already exists (both columns carry a uniqueness constraint).
    /// Returns [`AppError::Internal`] on other storage errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Returns the most recently issued mapping, if any.
    ///
    /// Only consulted at startup to resume the counter after a restart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_latest(&self) -> Result<Option<Mapping>, AppError>;

    /// Storage connectivity probe for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
