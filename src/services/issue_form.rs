use crate::models::FieldMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// What GitHub renders for an optional field left blank.
pub const NO_RESPONSE: &str = "_No response_";

static SECTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^### ").expect("Invalid section marker regex pattern"));
static EMPTY_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A```\w*\s*```\z").expect("Invalid empty fence regex pattern"));
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A```\w*\n?(.*?)```\z").expect("Invalid fenced block regex pattern")
});

/// Splits a rendered issue-form body into `label -> value`.
///
/// Each section starts with a `### <label>` line and runs until the next
/// one. Text before the first marker is ignored. Never fails: input without
/// markers gives an empty map.
pub fn parse(body: &str) -> FieldMap {
    let body = body.replace("\r\n", "\n");
    let mut fields = FieldMap::new();

    // The first piece is whatever precedes the first marker.
    for section in SECTION_MARKER.split(&body).skip(1) {
        if section.trim().is_empty() {
            continue;
        }
        let (label, value) = section.split_once('\n').unwrap_or((section, ""));
        fields.insert(label.trim(), normalize_value(value));
    }

    fields
}

/// Maps the placeholder and empty code fences to `""`, unwraps fenced
/// textarea content, and trims everything else.
fn normalize_value(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() || value == NO_RESPONSE || EMPTY_FENCE.is_match(value) {
        return String::new();
    }
    match FENCED_BLOCK.captures(value) {
        Some(caps) => caps[1].trim().to_string(),
        None => value.to_string(),
    }
}
