//! Load the working set of effect identifiers from a structured or line-based document.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::document::{DocumentFormat, parse_structured, read_text};
use crate::error::SourceError;

/// Accepted shapes for structured identifier documents.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdentifierDocument {
    /// `["bait_switch", "maneki-neko"]`
    List(Vec<String>),
    /// `{"effects": [...]}` or `{"identifiers": [...]}`
    Wrapped {
        #[serde(alias = "identifiers")]
        effects: Vec<String>,
    },
    /// `{"bait_switch": {...}, "maneki-neko": {...}}`
    Keyed(BTreeMap<String, IgnoredAny>),
}

impl IdentifierDocument {
    fn into_raw(self) -> Vec<String> {
        match self {
            Self::List(values) | Self::Wrapped { effects: values } => values,
            Self::Keyed(map) => map.into_keys().collect(),
        }
    }
}

/// Read the identifier set from `path`.
///
/// JSON, YAML and TOML documents may hold a list, an `effects`/`identifiers` list, or a table
/// keyed by identifier. Other files are read one identifier per line with `#` comments.
/// A missing or unreadable file is an error; so is a structured document of another shape.
pub fn load_identifiers(path: &Path) -> Result<BTreeSet<String>, SourceError> {
    let content = read_text(path)?;
    let identifiers = match DocumentFormat::from_path(path) {
        DocumentFormat::PlainText => parse_identifier_lines(&content),
        format => {
            let document: IdentifierDocument = parse_structured(path, format, &content)?;
            collect_identifiers(document.into_raw())
        }
    };

    tracing::debug!(
        path = %path.display(),
        count = identifiers.len(),
        "loaded effect identifiers"
    );
    Ok(identifiers)
}

/// Parse a line-based identifier list, ignoring blank lines and `#` comments.
pub fn parse_identifier_lines(content: &str) -> BTreeSet<String> {
    collect_identifiers(
        content
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .map(|line| line.trim().trim_end_matches(',').to_string()),
    )
}

fn collect_identifiers(values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
    values
        .into_iter()
        .filter_map(|value| clean_identifier(&value))
        .collect()
}

/// Trim an identifier and strip one pair of surrounding quotes.
fn clean_identifier(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(*quote)
                .and_then(|rest| rest.strip_suffix(*quote))
        })
        .unwrap_or(trimmed)
        .trim();

    (!unquoted.is_empty()).then(|| unquoted.to_string())
}
