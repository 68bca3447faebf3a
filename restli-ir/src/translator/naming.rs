//! Synthesized identifiers.
//!
//! Anonymous unions and complex keys have no name in the IDL. Their names
//! are built from path segments, each exported (first character
//! upper-cased, remainder kept verbatim) and joined with `_`.

/// Separator between exported segments.
pub const SEGMENT_SEPARATOR: &str = "_";

/// Upper-case the first character of `segment`.
///
/// `colorUnion` becomes `ColorUnion`; `HTTPStatus` is left as is.
pub fn exported_identifier(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of a union found at `hierarchy`.
pub fn union_name(hierarchy: &[String]) -> String {
    hierarchy
        .iter()
        .map(|segment| exported_identifier(segment))
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Name of the complex key of the collection `resource_name`.
pub fn complex_key_name(resource_name: &str, suffix: &str) -> String {
    [exported_identifier(resource_name), suffix.to_string()].join(SEGMENT_SEPARATOR)
}
