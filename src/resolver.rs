//! Resolution orchestrator tying candidate generation to the storage tier locator.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::locator::{AssetProbe, DEFAULT_TRACE_LIMIT, FilesystemProbe, locate_icon};
use crate::models::{ResolutionReport, ResolutionResult, StorageTier};
use crate::naming::generate_icon_candidates;
use crate::synonyms::SynonymTable;

/// Resolves effect identifiers against a merged synonym table and ordered storage tiers.
///
/// The table and tiers are fixed at construction and only read afterwards, so a resolver can
/// be shared across threads whenever its probe can.
#[derive(Debug, Clone)]
pub struct IconResolver<P = FilesystemProbe> {
    table: SynonymTable,
    tiers: Vec<StorageTier>,
    probe: P,
    trace_limit: usize,
}

impl IconResolver<FilesystemProbe> {
    /// Create a resolver that checks the real filesystem.
    pub fn new(table: SynonymTable, tiers: Vec<StorageTier>) -> Self {
        Self {
            table,
            tiers,
            probe: FilesystemProbe,
            trace_limit: DEFAULT_TRACE_LIMIT,
        }
    }
}

impl<P: AssetProbe> IconResolver<P> {
    /// Swap the existence probe.
    pub fn with_probe<Q: AssetProbe>(self, probe: Q) -> IconResolver<Q> {
        IconResolver {
            table: self.table,
            tiers: self.tiers,
            probe,
            trace_limit: self.trace_limit,
        }
    }

    /// Limit how many candidates a missing result carries.
    pub fn with_trace_limit(mut self, trace_limit: usize) -> Self {
        self.trace_limit = trace_limit;
        self
    }

    /// Merged synonym table in use.
    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    /// Storage tiers in probe order.
    pub fn tiers(&self) -> &[StorageTier] {
        &self.tiers
    }

    /// Ordered filename candidates for `identifier`.
    pub fn candidates(&self, identifier: &str) -> Vec<String> {
        generate_icon_candidates(identifier, &self.table)
    }

    /// Resolve a single identifier.
    pub fn resolve(&self, identifier: &str) -> ResolutionResult {
        let candidates = self.candidates(identifier);
        let result = locate_icon(&candidates, &self.tiers, &self.probe, self.trace_limit);

        match &result {
            ResolutionResult::Found { path, stem } => debug!(
                identifier,
                stem = stem.as_str(),
                path = %path.display(),
                "resolved effect icon"
            ),
            ResolutionResult::Missing { .. } => debug!(
                identifier,
                candidates = candidates.len(),
                "no icon found for effect"
            ),
        }

        result
    }

    /// Resolve every identifier and aggregate the results into a sorted report.
    ///
    /// Identifiers are trimmed; blanks and duplicates are dropped before resolution.
    pub fn run<I, S>(&self, identifiers: I) -> ResolutionReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let identifiers: BTreeSet<String> = identifiers
            .into_iter()
            .map(|identifier| identifier.as_ref().trim().to_string())
            .filter(|identifier| !identifier.is_empty())
            .collect();

        let mut report = ResolutionReport::default();
        for identifier in identifiers {
            let result = self.resolve(&identifier);
            report.record(identifier, result);
        }
        report.sort();

        info!(
            found = report.found.len(),
            missing = report.missing.len(),
            "effect icon resolution finished"
        );
        report
    }
}
