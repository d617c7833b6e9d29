//! Field name normalization.
//!
//! Record fields are declared in camel case (`UserName`, `HTTPStatus`) while
//! database columns are lower snake case. [`to_snake_case`] bridges the two by
//! splitting on camel-case word boundaries, keeping acronym runs together with
//! the word they prefix.
//!
//! The split follows the boundary pattern `(^[^A-Z]*|[A-Z]*)([A-Z][^A-Z]+|$)`
//! applied repeatedly from left to right: each match contributes its two
//! captures (when non-empty) as segments. Characters no match can start on
//! are dropped, so `aBC` yields `bc`.

use regex::Regex;
use std::sync::OnceLock;

static CAMEL_BOUNDARY_RE: OnceLock<Regex> = OnceLock::new();

fn camel_boundary_regex() -> &'static Regex {
    CAMEL_BOUNDARY_RE.get_or_init(|| {
        Regex::new("(^[^A-Z]*|[A-Z]*)([A-Z][^A-Z]+|$)")
            .unwrap_or_else(|error| panic!("camel boundary regex failed to compile: {error}"))
    })
}

/// Convert a camel-case identifier into lower snake case.
///
/// ```
/// use fields::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("UserID"), "user_id");
/// assert_eq!(to_snake_case("HTTPStatusCode"), "http_status_code");
/// ```
pub fn to_snake_case(identifier: &str) -> String {
    let segments: Vec<&str> = camel_boundary_regex()
        .captures_iter(identifier)
        .flat_map(|caps| [caps.get(1), caps.get(2)])
        .flatten()
        .map(|m| m.as_str())
        .filter(|segment| !segment.is_empty())
        .collect();

    segments.join("_").to_lowercase()
}
