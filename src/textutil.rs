use lazy_static::lazy_static;
use regex::Regex;

/// Collapses each run of whitespace (newlines included) into a single space
/// and trims leading and trailing whitespace. Empty input yields an empty
/// string.
///
/// This is the only text transformation applied to free-text fields from the
/// export; right-to-left text passes through untouched.
pub fn normalize_whitespace(s: &str) -> String {
    lazy_static! {
        static ref WHITESPACE_RX: Regex = Regex::new(r"\s+").unwrap();
    }
    WHITESPACE_RX.replace_all(s.trim(), " ").into_owned()
}
