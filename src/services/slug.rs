use once_cell::sync::Lazy;
use regex::Regex;

/// Longest title portion a session slug may carry.
pub const TITLE_SLUG_MAX_LEN: usize = 45;
/// Stands in for the presenter's last name when no presenter was given.
pub const FALLBACK_LASTNAME: &str = "session";

static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("Invalid separator regex pattern"));

/// Lowercases `text`, drops everything but ASCII letters, digits,
/// whitespace, `-` and `_`, then turns each whitespace/underscore run into
/// one hyphen and trims hyphens from both ends.
///
/// Runs of literal hyphens are kept as they are. The output is a fixed
/// point: `slugify(&slugify(s)) == slugify(s)`.
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    SEPARATOR_RUN
        .replace_all(&kept, "-")
        .trim_matches('-')
        .to_string()
}

/// Session identifier: `<presenter last name>_<title, at most 45 chars>`.
pub fn make_slug(presenter: &str, title: &str) -> String {
    let lastname = presenter
        .split_whitespace()
        .last()
        .map(slugify)
        .unwrap_or_else(|| FALLBACK_LASTNAME.to_string());
    let title_slug = slugify(title);
    format!("{}_{}", lastname, truncate_title(&title_slug))
}

// Plain character cut; may land mid-word.
fn truncate_title(slug: &str) -> &str {
    let cut = slug
        .char_indices()
        .nth(TITLE_SLUG_MAX_LEN)
        .map(|(i, _)| i)
        .unwrap_or(slug.len());
    slug[..cut].trim_end_matches('-')
}
