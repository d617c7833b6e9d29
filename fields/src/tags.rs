use std::collections::HashMap;

/// Tag setting that overrides the column a field is stored in
pub const COLUMN_SETTING: &str = "COLUMN";

/// Parse an ORM-style tag string such as `column:user_name;not null;size:64`.
///
/// Segments are separated by `;` and split on their first `:`. Keys are
/// trimmed and upper-cased; a segment without a value maps the key to itself.
/// Values keep any further `:` characters verbatim. Empty segments are skipped.
pub fn parse_tag_settings(tag: &str) -> HashMap<String, String> {
    let mut settings = HashMap::new();

    for segment in tag.split(';') {
        let (raw_key, value) = match segment.split_once(':') {
            Some((key, value)) => (key, Some(value)),
            None => (segment, None),
        };

        let key = raw_key.trim().to_uppercase();
        if key.is_empty() {
            continue;
        }

        let value = value.map_or_else(|| key.clone(), str::to_string);
        settings.insert(key, value);
    }

    settings
}
