//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`database`] - Connection pool setup and schema initialization
//! - [`persistence`] - SQLite repository implementations

pub mod database;
pub mod persistence;
