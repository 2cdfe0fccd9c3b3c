//! DTOs for the create-mapping endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;

/// Request to create a mapping.
///
/// Both fields are required strings; anything else fails deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMappingRequest {
    /// Caller-chosen short code, 1 to 80 characters.
    #[validate(length(min = 1, max = 80))]
    pub short_code: String,

    /// Target URL. Its format is checked by the mapping service.
    pub long_url: String,
}

impl CreateMappingRequest {
    /// Checks the payload shape and converts it into a [`NewMapping`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidPayload`] if the short code is empty or too long.
    pub fn into_new_mapping(self) -> Result<NewMapping, AppError> {
        self.validate()?;

        Ok(NewMapping {
            short_code: self.short_code,
            long_url: self.long_url,
        })
    }
}

/// Response returned after a mapping is created.
#[derive(Debug, Serialize)]
pub struct CreateMappingResponse {
    pub message: &'static str,
    pub short_code: String,
    pub long_url: String,
}

impl From<Mapping> for CreateMappingResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            message: "Mapping created",
            short_code: mapping.short_code,
            long_url: mapping.long_url,
        }
    }
}
