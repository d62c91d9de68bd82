//! Parsing of typed input

use crate::error::InputError;

/// Parse one coordinate; surrounding whitespace is ignored
///
/// Negative and oversized values parse fine; bounds are checked by the
/// session so they can be reported separately.
pub fn parse_coordinate(text: &str) -> Result<i32, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}

/// Parse an optional number where empty input means `default`
pub fn parse_or_default<T: std::str::FromStr>(text: &str, default: T) -> Result<T, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse::<T>()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}

/// Yes/no answer; only an explicit "yes" counts
pub fn is_yes(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("yes")
}
