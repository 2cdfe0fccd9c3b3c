//! Utility functions shared across layers.
//!
//! - [`url_validator`] - Long URL format check

pub mod url_validator;
