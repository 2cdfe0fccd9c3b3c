//! Domain layer containing the mapping entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or storage layers. Storage
//! implementations live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
