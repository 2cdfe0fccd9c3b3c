//! Repository trait for mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and resolving mappings.
///
/// Mappings are create-only: there is no update, delete or listing operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// The storage layer's unique constraint on `short_code` is authoritative:
    /// of two concurrent inserts with the same code at most one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateShortCode`] if the short code already exists.
    /// Returns [`AppError::Database`] on other database errors.
    async fn create(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Finds a mapping by its short code (exact, case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Mapping>, AppError>;
}
