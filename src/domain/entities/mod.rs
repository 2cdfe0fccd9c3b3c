//! Core domain entities.
//!
//! - [`Mapping`] - A persisted short code to long URL association
//! - [`NewMapping`] - Validated input for creating a mapping

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
