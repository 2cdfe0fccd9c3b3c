//! # URL Mapper
//!
//! A small URL mapping service built with Axum and SQLite. Callers register a
//! long URL under a short code of their choosing; requests for the short code
//! are redirected to the long URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and repository trait
//! - **Application Layer** ([`application`]) - Validation and duplicate handling
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, schema and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors and middleware
//!
//! ## HTTP Interface
//!
//! | Method | Path            | Success                   | Failure          |
//! |--------|-----------------|---------------------------|------------------|
//! | POST   | `/api/mappings` | 201 `{message, short_code, long_url}` | 400 `{error}` |
//! | GET    | `/{code}`       | 302 to the stored URL     | 404, empty body  |
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://mappings.db"
//! cargo run
//!
//! curl -X POST localhost:5000/api/mappings \
//!      -H 'content-type: application/json' \
//!      -d '{"short_code":"abc","long_url":"https://example.com"}'
//! curl -i localhost:5000/abc
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::MappingService;
    pub use crate::domain::entities::{Mapping, NewMapping};
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteMappingRepository;
    pub use crate::state::AppState;
}
