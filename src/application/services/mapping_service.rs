//! Mapping creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::url_validator::is_valid_long_url;

/// Service for creating and resolving short code mappings.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self { repository }
    }

    /// Creates a mapping after validating the long URL and checking for duplicates.
    ///
    /// Checks run in order: URL format, then duplicate short code. The
    /// duplicate pre-check only avoids a doomed insert; the store's unique
    /// constraint decides races between concurrent creators.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the long URL is malformed.
    /// Returns [`AppError::DuplicateShortCode`] if the short code is taken.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create_mapping(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        if !is_valid_long_url(&new_mapping.long_url) {
            return Err(AppError::InvalidUrl);
        }

        if self
            .repository
            .find_by_code(&new_mapping.short_code)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateShortCode);
        }

        let short_code = new_mapping.short_code.clone();
        match self.repository.create(new_mapping).await {
            Ok(mapping) => {
                info!(
                    id = mapping.id,
                    short_code = %mapping.short_code,
                    "Mapping created"
                );
                Ok(mapping)
            }
            Err(AppError::DuplicateShortCode) => {
                warn!(%short_code, "Short code claimed by a concurrent request");
                Err(AppError::DuplicateShortCode)
            }
            Err(e) => Err(e),
        }
    }

    /// Resolves a short code to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this short code.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<Mapping, AppError> {
        let mapping = self.repository.find_by_code(short_code).await?;

        match mapping {
            Some(mapping) => {
                debug!(short_code, "Mapping resolved");
                Ok(mapping)
            }
            None => {
                debug!(short_code, "Mapping not found");
                Err(AppError::NotFound)
            }
        }
    }
}
