use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::document::{DocumentFormat, parse_structured, read_text};
use crate::error::SourceError;

/// One origin of identifier → stem overrides, kept in document order.
///
/// Entries are stored as supplied; trimming, case-folding and validation happen when sources
/// are merged into a [`super::SynonymTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymSource {
    name: String,
    entries: Vec<(String, String)>,
}

impl SynonymSource {
    /// Create an empty source with a display name used in diagnostics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Build a source from ordered key/stem pairs.
    pub fn from_pairs<K, V>(name: impl Into<String>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut source = Self::new(name);
        for (key, stem) in pairs {
            source.insert(key, stem);
        }
        source
    }

    /// Append an entry. Later duplicates are kept but lose to earlier ones on merge.
    pub fn insert(&mut self, key: impl Into<String>, stem: impl Into<String>) {
        self.entries.push((key.into(), stem.into()));
    }

    /// Display name of the source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, stem)| (key.as_str(), stem.as_str()))
    }

    /// Number of raw entries, including any that the merger will later reject.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the source has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a synonym document (JSON, YAML or TOML) from disk.
    ///
    /// The document is either a flat key → stem table or a table nested under `synonyms`.
    /// Values that are not strings are skipped.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let content = read_text(path)?;
        let value: Value = parse_structured(path, DocumentFormat::from_path(path), &content)?;
        Ok(Self::from_value(path.display().to_string(), &value))
    }

    /// Like [`SynonymSource::load`], but a missing file yields `None` instead of an error.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, SourceError> {
        match Self::load(path) {
            Ok(source) => Ok(Some(source)),
            Err(err) if err.is_not_found() => {
                warn!(path = %path.display(), "synonym source not found, skipping");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Build a source from an already-parsed document.
    pub fn from_value(name: impl Into<String>, value: &Value) -> Self {
        let mut source = Self::new(name);

        let Some(map) = synonym_map(value) else {
            warn!(source = source.name.as_str(), "synonym source is not a key/value table, ignoring");
            return source;
        };

        for (key, stem) in map {
            match stem {
                Value::String(stem) => source.insert(key.clone(), stem.clone()),
                other => debug!(
                    source = source.name.as_str(),
                    key = key.as_str(),
                    value = %other,
                    "skipping non-string synonym value"
                ),
            }
        }

        source
    }
}

fn synonym_map(value: &Value) -> Option<&Map<String, Value>> {
    let map = value.as_object()?;
    match map.get("synonyms") {
        Some(Value::Object(nested)) => Some(nested),
        _ => Some(map),
    }
}
