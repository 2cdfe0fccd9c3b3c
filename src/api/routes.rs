//! API route configuration.

use crate::api::handlers::create_mapping_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Mapping management routes.
///
/// # Endpoints
///
/// - `POST /api/mappings` - Create a mapping
///
/// Routes are declared with their full path rather than nested under `/api`,
/// so `GET /api` still resolves as a short code.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/api/mappings", post(create_mapping_handler))
}
