//! Resolved project layout and the loading step that precedes a resolution run.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::info;

use crate::error::SourceError;
use crate::identifiers::load_identifiers;
use crate::models::StorageTier;
use crate::resolver::IconResolver;
use crate::synonyms::{BuiltinSynonyms, SynonymSource, SynonymTable};

/// Fully resolved paths and settings for one resolver project.
#[derive(Debug, Clone, PartialEq)]
pub struct IconProjectLayout {
    /// Identifier source document.
    pub identifiers_path: PathBuf,
    /// Synonym sources in precedence order.
    pub synonym_paths: Vec<PathBuf>,
    /// Whether the built-in synonym set is merged first.
    pub builtin: BuiltinSynonyms,
    /// Storage tiers, most preferred first.
    pub tiers: Vec<StorageTier>,
    /// Number of candidates listed for a missing icon.
    pub trace_limit: usize,
    /// Minimum similarity score for fuzzy synonym suggestions.
    pub suggestion_threshold: f64,
}

/// Inputs loaded from disk for a single run.
#[derive(Debug, Clone)]
pub struct ResolverInputs {
    /// Working identifier set, sorted and de-duplicated.
    pub identifiers: BTreeSet<String>,
    /// Merged synonym table.
    pub table: SynonymTable,
    /// Files and directories a build script should watch for changes.
    pub rerun_paths: Vec<PathBuf>,
}

impl IconProjectLayout {
    /// Load the identifier set. Missing or unreadable sources are fatal.
    pub fn load_identifiers(&self) -> Result<BTreeSet<String>, SourceError> {
        load_identifiers(&self.identifiers_path)
    }

    /// Load every configured synonym source that exists and merge them in order.
    pub fn load_synonym_table(&self) -> Result<SynonymTable, SourceError> {
        let mut sources = Vec::with_capacity(self.synonym_paths.len());
        for path in &self.synonym_paths {
            if let Some(source) = SynonymSource::load_optional(path)? {
                sources.push(source);
            }
        }

        Ok(SynonymTable::merge(&sources, self.builtin))
    }

    /// Load identifiers and synonyms. The identifier source is read first so that a missing
    /// source fails before any other work happens.
    pub fn load_inputs(&self) -> Result<ResolverInputs, SourceError> {
        let identifiers = self.load_identifiers()?;
        let table = self.load_synonym_table()?;

        info!(
            identifiers = identifiers.len(),
            synonyms = table.len(),
            tiers = self.tiers.len(),
            "loaded resolver inputs"
        );

        Ok(ResolverInputs {
            identifiers,
            table,
            rerun_paths: self.rerun_paths(),
        })
    }

    /// Create a filesystem-backed resolver over this layout's tiers.
    pub fn resolver(&self, table: SynonymTable) -> IconResolver {
        IconResolver::new(table, self.tiers.clone()).with_trace_limit(self.trace_limit)
    }

    fn rerun_paths(&self) -> Vec<PathBuf> {
        let mut seen = BTreeSet::new();
        std::iter::once(&self.identifiers_path)
            .chain(&self.synonym_paths)
            .chain(self.tiers.iter().map(|tier| &tier.directory))
            .filter(|path| seen.insert(*path))
            .cloned()
            .collect()
    }
}
