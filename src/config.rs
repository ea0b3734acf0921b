//! Resolver configuration loader describing input documents and storage tiers.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::document::{DocumentFormat, parse_structured, read_text};
use crate::error::SourceError;
use crate::locator::DEFAULT_TRACE_LIMIT;
use crate::models::StorageTier;
use crate::project::IconProjectLayout;
use crate::suggest::DEFAULT_SUGGESTION_THRESHOLD;
use crate::synonyms::BuiltinSynonyms;

/// File name searched for when no explicit configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "icons.config.json";

/// One storage tier as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TierConfig {
    /// Directory holding the assets, relative to the configuration directory.
    pub directory: String,
    /// Asset file extension, with or without the leading dot.
    pub extension: String,
}

impl TierConfig {
    fn new(directory: &str, extension: &str) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
        }
    }
}

/// Discoverable resolver configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Identifier source document.
    pub identifiers: String,
    /// Synonym sources in precedence order, hand-curated before auto-suggested.
    pub synonyms: Vec<String>,
    /// Whether the built-in synonym set is merged ahead of the configured sources.
    pub include_builtin_synonyms: bool,
    /// Storage tiers, most preferred first.
    pub tiers: Vec<TierConfig>,
    /// Number of candidates listed for a missing icon.
    pub trace_limit: usize,
    /// Minimum similarity score for fuzzy synonym suggestions.
    pub suggestion_threshold: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            identifiers: "effects.json".into(),
            synonyms: vec!["synonyms.json".into(), "synonyms.suggested.json".into()],
            include_builtin_synonyms: true,
            tiers: vec![
                TierConfig::new("optimized/48", "webp"),
                TierConfig::new("icons", "png"),
                TierConfig::new("icons/effects", "png"),
            ],
            trace_limit: DEFAULT_TRACE_LIMIT,
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
        }
    }
}

impl ResolverConfig {
    /// Load `icons.config.json` from `dir`, falling back to defaults when the file does not
    /// exist. A file that exists but fails to parse is still an error.
    pub fn discover(dir: &Path) -> Result<Self, SourceError> {
        match Self::from_path(&dir.join(DEFAULT_CONFIG_FILE)) {
            Ok(config) => Ok(config),
            Err(err) if err.is_not_found() => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Read configuration from a specific JSON, YAML or TOML file.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let content = read_text(path)?;
        parse_structured(path, DocumentFormat::from_path(path), &content)
    }

    /// Resolve every configured path against `base_dir` and produce the runtime layout.
    pub fn into_layout(self, base_dir: &Path) -> IconProjectLayout {
        IconProjectLayout {
            identifiers_path: base_dir.join(&self.identifiers),
            synonym_paths: self
                .synonyms
                .iter()
                .map(|path| base_dir.join(path))
                .collect(),
            builtin: if self.include_builtin_synonyms {
                BuiltinSynonyms::Include
            } else {
                BuiltinSynonyms::Suppress
            },
            tiers: self
                .tiers
                .iter()
                .map(|tier| StorageTier::new(&tier.directory, &tier.extension).rooted_at(base_dir))
                .collect(),
            trace_limit: self.trace_limit,
            suggestion_threshold: self.suggestion_threshold,
        }
    }

    /// Directory that relative paths in the configuration file at `path` resolve against.
    pub fn base_dir_of(path: &Path) -> PathBuf {
        path.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
