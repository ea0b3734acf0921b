use std::sync::OnceLock;

use regex::Regex;

fn whitespace_runs() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("invalid whitespace regex"))
}

fn disallowed_slug_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-z0-9_-]").expect("invalid slug regex"))
}

/// Primary normalised key for an identifier.
///
/// Every character outside `[A-Za-z0-9-_]` becomes a single `_` and the result is
/// lower-cased. Non-ASCII letters are replaced as well, so the key is always plain ASCII.
pub fn underscore_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Looser slug used for the whitespace-derived base forms: lower-case, whitespace runs become
/// `-`, and anything outside `[a-z0-9-_]` is dropped rather than replaced.
pub fn loose_slug(value: &str) -> String {
    let lowered = value.to_lowercase();
    let dashed = whitespace_runs().replace_all(&lowered, "-");
    disallowed_slug_chars().replace_all(&dashed, "").into_owned()
}

/// Replace each run of whitespace in `value` with `replacement`.
pub fn collapse_whitespace(value: &str, replacement: &str) -> String {
    whitespace_runs().replace_all(value, replacement).into_owned()
}
