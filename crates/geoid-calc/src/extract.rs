//! Height extraction from the form service's HTML response.

use crate::{GeoidError, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Pattern the height is reported in (matched case-insensitively).
pub const HEIGHT_PATTERN: &str = "<br>([^<]+) Meters<br>";

/// Value reported when no height is available.
pub const SENTINEL_HEIGHT: f64 = -9999.99;

static HEIGHT_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(HEIGHT_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("HEIGHT_PATTERN is a valid regex")
});

/// Extract the geoid height in meters from a response body.
///
/// Only the first match is considered. The captured text is trimmed before
/// parsing.
pub fn extract_height(html: &str) -> Result<f64> {
    let captures = HEIGHT_REGEX.captures(html).ok_or(GeoidError::NoData)?;
    let text = captures.get(1).map_or("", |m| m.as_str()).trim();
    text.parse::<f64>()
        .map_err(|_| GeoidError::MalformedHeight {
            text: text.to_string(),
        })
}

/// Extract the geoid height, returning [`SENTINEL_HEIGHT`] on any failure.
pub fn extract_height_or_sentinel(html: &str) -> f64 {
    extract_height(html).unwrap_or(SENTINEL_HEIGHT)
}
