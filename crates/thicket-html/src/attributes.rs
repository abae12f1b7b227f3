//! Attribute extraction from a tag segment.

use std::sync::LazyLock;

use regex::Regex;
use thicket_dom::Element;

/// A `key="value"` pair. Only double-quoted values are recognized.
static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\S*?)="(.*?)""#).expect("attribute pattern is a valid regex")
});

/// Scan `rest` (a tag segment without its tag name) for `key="value"` pairs
/// and apply them to `element`.
///
/// - `id` overwrites the element's id, so the last occurrence wins.
/// - `class` is split on whitespace and each non-empty token is appended.
/// - Any other key is stored as an attribute; a repeated key overwrites the
///   earlier value.
///
/// Unquoted values, single-quoted values, bare boolean attributes and pairs
/// with an empty key are skipped without error.
pub fn extract_attributes(rest: &str, element: &mut Element) {
    for captures in ATTRIBUTE_PATTERN.captures_iter(rest) {
        let (Some(key), Some(value)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        match key.as_str() {
            "" => {}
            "id" => element.set_id(value.as_str()),
            "class" => {
                for class in value.as_str().split_whitespace() {
                    element.add_class(class);
                }
            }
            name => element.set_attribute(name, value.as_str()),
        }
    }
}
