//! Probe storage tiers for the first existing icon asset.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::models::{ResolutionResult, StorageTier};

/// Number of candidates kept in a [`ResolutionResult::Missing`] trace by default.
pub const DEFAULT_TRACE_LIMIT: usize = 5;

/// Trait describing how asset existence is checked.
pub trait AssetProbe {
    /// Returns `true` when an asset exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by filesystem metadata lookups.
///
/// Only regular files (or symlinks to them) count. Errors other than "not found" are logged
/// and reported as missing so that one unreadable path never aborts a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemProbe;

impl AssetProbe for FilesystemProbe {
    fn exists(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(metadata) => metadata.is_file(),
            Err(err) if err.kind() == ErrorKind::NotFound => false,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "treating unreadable asset path as missing");
                false
            }
        }
    }
}

/// In-memory probe over a fixed set of paths.
impl AssetProbe for BTreeSet<PathBuf> {
    fn exists(&self, path: &Path) -> bool {
        self.contains(path)
    }
}

impl<P: AssetProbe + ?Sized> AssetProbe for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Find the first candidate that exists in any storage tier.
///
/// Candidates form the outer loop and tiers the inner loop, so a higher-priority candidate in
/// a less preferred tier beats a lower-priority candidate in a preferred one. When nothing
/// matches, the first `trace_limit` candidates are returned for diagnostics.
pub fn locate_icon<P: AssetProbe + ?Sized>(
    candidates: &[String],
    tiers: &[StorageTier],
    probe: &P,
    trace_limit: usize,
) -> ResolutionResult {
    for candidate in candidates {
        if !is_probeable_stem(candidate) {
            trace!(candidate = candidate.as_str(), "skipping candidate that is not a plain file stem");
            continue;
        }

        for tier in tiers {
            let path = tier.asset_path(candidate);
            if probe.exists(&path) {
                return ResolutionResult::Found {
                    path,
                    stem: candidate.clone(),
                };
            }
        }
    }

    ResolutionResult::Missing {
        tried: candidates.iter().take(trace_limit).cloned().collect(),
    }
}

/// Stems that would escape the tier directory are never probed.
fn is_probeable_stem(stem: &str) -> bool {
    !stem.is_empty() && stem != "." && stem != ".." && !stem.contains(['/', '\\'])
}
