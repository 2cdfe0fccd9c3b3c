//! HTTP request handlers for API endpoints.

pub mod mappings;
pub mod redirect;

pub use mappings::create_mapping_handler;
pub use redirect::redirect_handler;
