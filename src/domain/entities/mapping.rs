//! Mapping entity representing a short code and its target URL.

/// Maximum length of a long URL, in characters.
pub const MAX_LONG_URL_LEN: usize = 2083;

/// A persisted association between a short code and a long URL.
///
/// Mappings are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, short_code: String, long_url: String) -> Self {
        Self {
            id,
            short_code,
            long_url,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub short_code: String,
    pub long_url: String,
}
