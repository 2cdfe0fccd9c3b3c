//! Handler for short code redirect.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::extract::ShortCodePath;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its stored long URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Responds `302 Found` with `Location` set to the stored URL exactly as it was
/// submitted.
///
/// # Errors
///
/// Returns 404 Not Found with an empty body if the short code doesn't exist or
/// the path segment does not decode to UTF-8.
pub async fn redirect_handler(
    ShortCodePath(short_code): ShortCodePath,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.mapping_service.resolve(&short_code).await?;

    let location = HeaderValue::from_bytes(mapping.long_url.as_bytes()).map_err(|e| {
        AppError::Internal(format!(
            "stored URL for '{}' is not a valid header value: {}",
            short_code, e
        ))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
