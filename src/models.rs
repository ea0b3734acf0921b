//! Data structures produced while resolving effect icons.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

/// One place and format probed for icon assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageTier {
    /// Directory holding the assets.
    pub directory: PathBuf,
    /// File extension without the leading dot; empty means bare stems.
    pub extension: String,
}

impl StorageTier {
    /// Create a tier, accepting extensions with or without a leading dot.
    pub fn new(directory: impl Into<PathBuf>, extension: impl AsRef<str>) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.as_ref().trim().trim_start_matches('.').to_string(),
        }
    }

    /// Filename for `stem` in this tier.
    pub fn file_name(&self, stem: &str) -> String {
        if self.extension.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}.{}", self.extension)
        }
    }

    /// Full path at which `stem` would live in this tier.
    pub fn asset_path(&self, stem: &str) -> PathBuf {
        self.directory.join(self.file_name(stem))
    }

    /// Same tier with a relative directory anchored under `base`.
    pub fn rooted_at(&self, base: &Path) -> Self {
        Self {
            directory: base.join(&self.directory),
            extension: self.extension.clone(),
        }
    }
}

impl fmt::Display for StorageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.directory.display())?;
        if !self.extension.is_empty() {
            write!(f, " (.{})", self.extension)?;
        }
        Ok(())
    }
}

/// Parses `DIR:EXT`, splitting on the last colon so drive-letter paths keep working.
impl FromStr for StorageTier {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (directory, extension) = value
            .rsplit_once(':')
            .ok_or_else(|| format!("expected DIR:EXT, got '{value}'"))?;
        if directory.trim().is_empty() {
            return Err(format!("storage tier '{value}' has an empty directory"));
        }
        Ok(Self::new(directory.trim(), extension))
    }
}

/// Outcome of probing the storage tiers for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// An asset exists for one of the candidates.
    Found {
        /// Path of the matched asset.
        path: PathBuf,
        /// Candidate stem that matched.
        stem: String,
    },
    /// No candidate exists in any tier.
    Missing {
        /// Leading candidates that were tried, in priority order.
        tried: Vec<String>,
    },
}

impl ResolutionResult {
    /// Returns `true` for [`ResolutionResult::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Matched asset path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::Missing { .. } => None,
        }
    }

    /// Matched stem, if any.
    pub fn stem(&self) -> Option<&str> {
        match self {
            Self::Found { stem, .. } => Some(stem),
            Self::Missing { .. } => None,
        }
    }
}

/// Identifier that resolved to an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIcon {
    /// Effect identifier.
    pub identifier: String,
    /// Stem that matched.
    pub stem: String,
    /// Matched asset path.
    pub path: PathBuf,
}

/// Identifier without any matching asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingIcon {
    /// Effect identifier.
    pub identifier: String,
    /// Leading candidates that were tried, in priority order.
    pub tried: Vec<String>,
}

/// Aggregated results for a full resolution run, sorted by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    /// Identifiers with a matched asset.
    pub found: Vec<ResolvedIcon>,
    /// Identifiers needing a synonym or a new asset.
    pub missing: Vec<MissingIcon>,
}

impl ResolutionReport {
    /// Fold one identifier's result into the report.
    pub fn record(&mut self, identifier: impl Into<String>, result: ResolutionResult) {
        let identifier = identifier.into();
        match result {
            ResolutionResult::Found { path, stem } => self.found.push(ResolvedIcon {
                identifier,
                stem,
                path,
            }),
            ResolutionResult::Missing { tried } => {
                self.missing.push(MissingIcon { identifier, tried })
            }
        }
    }

    /// Sort both partitions lexicographically by identifier.
    pub fn sort(&mut self) {
        self.found.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        self.missing.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    }

    /// Total number of identifiers in the report.
    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }

    /// Returns `true` when every identifier resolved.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_normalises_extension_and_builds_paths() {
        let tier = StorageTier::new("optimized/48", ".webp");
        assert_eq!(tier.extension, "webp");
        assert_eq!(
            tier.asset_path("baitandswitch"),
            Path::new("optimized/48").join("baitandswitch.webp")
        );

        let bare = StorageTier::new("icons", "");
        assert_eq!(bare.file_name("fire"), "fire");
    }

    #[test]
    fn parses_tier_arguments() {
        let tier: StorageTier = "icons/effects:png".parse().unwrap();
        assert_eq!(tier, StorageTier::new("icons/effects", "png"));

        let drive: StorageTier = "C:\\icons:.webp".parse().unwrap();
        assert_eq!(drive.directory, PathBuf::from("C:\\icons"));
        assert_eq!(drive.extension, "webp");

        assert!("icons".parse::<StorageTier>().is_err());
        assert!(":png".parse::<StorageTier>().is_err());
    }

    #[test]
    fn report_partitions_and_sorts_results() {
        let mut report = ResolutionReport::default();
        report.record("zeta", ResolutionResult::Missing { tried: vec!["zeta".into()] });
        report.record("alpha", ResolutionResult::Found {
            path: PathBuf::from("icons/alpha.png"),
            stem: "alpha".into(),
        });
        report.record("beta", ResolutionResult::Missing { tried: Vec::new() });
        report.sort();

        assert_eq!(report.total(), 3);
        assert!(!report.is_complete());
        assert_eq!(report.found[0].identifier, "alpha");
        let missing: Vec<&str> = report
            .missing
            .iter()
            .map(|icon| icon.identifier.as_str())
            .collect();
        assert_eq!(missing, vec!["beta", "zeta"]);
    }

    #[test]
    fn serializes_results_with_status_tag() {
        let result = ResolutionResult::Missing { tried: vec!["a".into()] };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "missing");
        assert_eq!(json["tried"][0], "a");
    }
}
