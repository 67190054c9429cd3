use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_VALUE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[;\n]+").expect("valid multi-value separator regex"));

/// Collapse every run of whitespace to one space and trim both ends.
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a multi-valued cell on runs of `;` or newlines.
///
/// Each fragment is stripped of surrounding spaces and semicolons and
/// whitespace-normalized; empty fragments are dropped. Order is preserved.
pub fn split_multi_value(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    MULTI_VALUE_SEPARATOR
        .split(value)
        .map(|part| normalize_whitespace(part.trim_matches(|c| c == ' ' || c == ';')))
        .filter(|part| !part.is_empty())
        .collect()
}
