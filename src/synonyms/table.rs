use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Serialize;
use tracing::debug;

use super::{SynonymSource, builtin_synonyms};

/// Whether the built-in synonym set is merged ahead of external sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuiltinSynonyms {
    /// Merge the built-in set first, giving it the highest precedence.
    #[default]
    Include,
    /// Only merge the supplied sources.
    Suppress,
}

/// Stem chosen for a lookup key, plus the source that supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynonymEntry {
    /// Override filename stem.
    pub stem: String,
    /// Display name of the winning source.
    pub source: String,
}

/// Flat, read-only lookup table produced by merging ordered synonym sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: BTreeMap<String, SynonymEntry>,
}

impl SynonymTable {
    /// Merge `sources` in order. A key keeps the stem from the first source that defines it;
    /// entries with a blank key or stem are skipped.
    pub fn merge<'a>(
        sources: impl IntoIterator<Item = &'a SynonymSource>,
        builtin: BuiltinSynonyms,
    ) -> Self {
        let mut table = Self::default();

        if builtin == BuiltinSynonyms::Include {
            table.absorb(&builtin_synonyms());
        }
        for source in sources {
            table.absorb(source);
        }

        debug!(entries = table.len(), "merged synonym table");
        table
    }

    fn absorb(&mut self, source: &SynonymSource) {
        for (raw_key, raw_stem) in source.entries() {
            let key = normalize_lookup_key(raw_key);
            let stem = raw_stem.trim();
            if key.is_empty() || stem.is_empty() {
                debug!(
                    source = source.name(),
                    key = raw_key,
                    "skipping synonym entry with blank key or stem"
                );
                continue;
            }

            match self.entries.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(SynonymEntry {
                        stem: stem.to_string(),
                        source: source.name().to_string(),
                    });
                }
                Entry::Occupied(existing) => {
                    if existing.get().stem != stem {
                        debug!(
                            key = existing.key().as_str(),
                            kept = existing.get().stem.as_str(),
                            kept_from = existing.get().source.as_str(),
                            ignored = stem,
                            ignored_from = source.name(),
                            "synonym already defined by an earlier source"
                        );
                    }
                }
            }
        }
    }

    /// Stem mapped to `identifier`, if any. The identifier is trimmed and lower-cased first.
    pub fn lookup(&self, identifier: &str) -> Option<&str> {
        self.entry(identifier).map(|entry| entry.stem.as_str())
    }

    /// Full entry for `identifier`, including the source that supplied it.
    pub fn entry(&self, identifier: &str) -> Option<&SynonymEntry> {
        self.entries.get(&normalize_lookup_key(identifier))
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no synonyms are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalise a synonym key or identifier for table lookups: trimmed and lower-cased, with
/// internal whitespace left untouched.
pub fn normalize_lookup_key(value: &str) -> String {
    value.trim().to_lowercase()
}
