use std::sync::LazyLock;

use regex::Regex;

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d[\d,]*").unwrap());
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+(?:\.\d+)?").unwrap());

/// How the value of a `Label: value` bullet is cut out of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Up to the next colon: `- Slug: a:b` yields `a`.
    Segment,
    /// Everything after the label's colon: `- Tagline: Sea: and sky` yields `Sea: and sky`.
    Rejoined,
}

/// Cut the value out of `rest` (the text after the label's colon).
pub fn value(rest: &str, rule: ValueRule) -> String {
    match rule {
        ValueRule::Segment => rest.split(':').next().unwrap_or_default().trim().to_string(),
        ValueRule::Rejoined => rest.trim().to_string(),
    }
}

/// Lower-cased label with surrounding whitespace removed, for table lookups.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Leading integer, thousands separators allowed. `"184,089 GT"` → 184089.
pub fn parse_int(value: &str) -> Option<i64> {
    INT_RE
        .find(value.trim())
        .and_then(|m| m.as_str().replace(',', "").parse::<i64>().ok())
}

/// Leading decimal number. `"22.6 knots"` → 22.6.
pub fn parse_float(value: &str) -> Option<f64> {
    FLOAT_RE
        .find(value.trim().replace(',', "").as_str())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "yes" | "true" | "y" | "1"
    )
}

/// Comma split, each part trimmed, empties dropped.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append `extra` to `target` with a single space.
pub fn append_spaced(target: &mut String, extra: &str) {
    let extra = extra.trim();
    if extra.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(extra);
}

/// First `max` characters, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
