//! Fuzzy synonym suggestions for identifiers that failed to resolve.
//!
//! This step is deliberately separate from resolution. Its output is meant for human review
//! and, once accepted, is fed back as a lower-precedence synonym source.

use std::collections::BTreeSet;
use std::fs;

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{MissingIcon, StorageTier};
use crate::naming::underscore_key;
use crate::synonyms::{SynonymSource, normalize_lookup_key};

/// Minimum Jaro-Winkler similarity for a stem to be suggested.
pub const DEFAULT_SUGGESTION_THRESHOLD: f64 = 0.85;

/// Source name used when suggestions are turned into a synonym source.
pub const SUGGESTED_SOURCE_NAME: &str = "suggested";

/// Best-scoring asset stem for one missing identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// Missing effect identifier.
    pub identifier: String,
    /// Existing asset stem that looks closest.
    pub stem: String,
    /// Jaro-Winkler similarity in `0.0..=1.0`.
    pub score: f64,
}

/// Result of a suggestion pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Suggestions {
    /// Identifiers with a stem above the threshold, sorted by identifier.
    pub entries: Vec<Suggestion>,
    /// Identifiers without any stem above the threshold.
    pub unmatched: Vec<String>,
}

impl Suggestions {
    /// Convert the suggestions into a synonym source keyed by lower-cased identifier.
    pub fn to_synonym_source(&self) -> SynonymSource {
        SynonymSource::from_pairs(
            SUGGESTED_SOURCE_NAME,
            self.entries.iter().map(|suggestion| {
                (
                    normalize_lookup_key(&suggestion.identifier),
                    suggestion.stem.clone(),
                )
            }),
        )
    }

    /// Render the suggestions as a JSON synonym document.
    pub fn to_synonym_json(&self) -> serde_json::Result<String> {
        let map: serde_json::Map<String, serde_json::Value> = self
            .to_synonym_source()
            .entries()
            .map(|(key, stem)| (key.to_string(), serde_json::Value::from(stem)))
            .collect();
        let mut json = serde_json::to_string_pretty(&map)?;
        json.push('\n');
        Ok(json)
    }
}

/// Collect the stems of every asset present in the storage tiers.
///
/// Directories are listed non-recursively and only files carrying the tier's extension
/// count. Unreadable directories are skipped.
pub fn collect_available_stems(tiers: &[StorageTier]) -> BTreeSet<String> {
    let mut stems = BTreeSet::new();

    for tier in tiers {
        let entries = match fs::read_dir(&tier.directory) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    directory = %tier.directory.display(),
                    error = %err,
                    "skipping unreadable storage tier"
                );
                continue;
            }
        };

        let suffix = format!(".{}", tier.extension);
        for entry in entries.flatten() {
            if !fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_file()) {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().to_string();
            let stem = if tier.extension.is_empty() {
                Some(file_name.as_str())
            } else {
                file_name.strip_suffix(&suffix)
            };
            if let Some(stem) = stem.filter(|stem| !stem.is_empty()) {
                stems.insert(stem.to_string());
            }
        }
    }

    debug!(stems = stems.len(), "collected available icon stems");
    stems
}

/// Suggest the closest available stem for each missing identifier.
///
/// Each identifier is compared through its underscore key and its tried candidates, all
/// lower-cased, against every stem. Ties keep the lexicographically first stem.
pub fn suggest_synonyms(
    missing: &[MissingIcon],
    stems: &BTreeSet<String>,
    threshold: f64,
) -> Suggestions {
    let mut suggestions = Suggestions::default();

    for icon in missing {
        match best_match(icon, stems) {
            Some((stem, score)) if score >= threshold => suggestions.entries.push(Suggestion {
                identifier: icon.identifier.clone(),
                stem: stem.to_string(),
                score,
            }),
            _ => suggestions.unmatched.push(icon.identifier.clone()),
        }
    }

    suggestions.entries.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    suggestions.unmatched.sort();
    suggestions
}

fn best_match<'a>(icon: &MissingIcon, stems: &'a BTreeSet<String>) -> Option<(&'a str, f64)> {
    let probes: BTreeSet<String> = std::iter::once(underscore_key(&icon.identifier))
        .chain(icon.tried.iter().map(|candidate| candidate.to_lowercase()))
        .collect();

    let mut best: Option<(&str, f64)> = None;
    for stem in stems {
        let lowered = stem.to_lowercase();
        let score = probes
            .iter()
            .map(|probe| strsim::jaro_winkler(probe, &lowered))
            .fold(0.0, f64::max);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((stem.as_str(), score));
        }
    }

    best
}
