//! Handler for the create-mapping endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::mapping::{CreateMappingRequest, CreateMappingResponse};
use crate::api::extract::JsonPayload;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping from a caller-chosen short code to a long URL.
///
/// # Endpoint
///
/// `POST /api/mappings`
///
/// # Request Body
///
/// ```json
/// { "short_code": "abc", "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "message": "Mapping created", "short_code": "abc", "long_url": "https://example.com" }
/// ```
///
/// # Errors
///
/// All failures are `400 Bad Request` with an `{"error": ...}` body, checked in order:
///
/// 1. `Invalid payload` - body missing, not JSON, or a field missing/mistyped/empty
/// 2. `Invalid URL format` - `long_url` fails the format check
/// 3. `Short code already exists` - the code is taken
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreateMappingRequest>,
) -> Result<(StatusCode, Json<CreateMappingResponse>), AppError> {
    let new_mapping = payload.into_new_mapping()?;

    let mapping = state.mapping_service.create_mapping(new_mapping).await?;

    Ok((StatusCode::CREATED, Json(mapping.into())))
}
