//! Long URL format check.
//!
//! The accepted long URL format is loose: an `http`, `https`,
//! `ftp` or `ftps` scheme (any case) followed by `://` and at least one
//! character, with no whitespace or ASCII control characters anywhere. Hosts
//! are not resolved and targets are not contacted.
//!
//! Every accepted URL is a valid `Location` header value.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::mapping::MAX_LONG_URL_LEN;

/// Compiled regex for long URL validation.
static LONG_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:http|ftp)s?://\S+$").unwrap());

/// Returns true if `url` is an acceptable mapping target.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_long_url("https://example.com"));
/// assert!(is_valid_long_url("FTPS://files.example.com/a.txt"));
///
/// assert!(!is_valid_long_url("not-a-url"));
/// assert!(!is_valid_long_url("https://example.com/a b"));
/// assert!(!is_valid_long_url("mailto:someone@example.com"));
/// assert!(!is_valid_long_url("https://a\u{1}b"));
/// ```
pub fn is_valid_long_url(url: &str) -> bool {
    url.chars().count() <= MAX_LONG_URL_LEN
        && !url.chars().any(|c| c.is_ascii_control())
        && LONG_URL_REGEX.is_match(url)
}
