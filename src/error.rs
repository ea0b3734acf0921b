//! Errors raised while loading resolver inputs from disk.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or parse one of the structured input documents (configuration, identifier
/// source or synonym source).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document could not be read from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON for the expected shape.
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The document is not valid YAML for the expected shape.
    #[error("failed to parse {}: {source}", .path.display())]
    Yaml {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        #[source]
        source: serde_yaml::Error,
    },
    /// The document is not valid TOML for the expected shape.
    #[error("failed to parse {}: {source}", .path.display())]
    Toml {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        #[source]
        source: toml::de::Error,
    },
}

impl SourceError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::Json { path, .. }
            | Self::Yaml { path, .. }
            | Self::Toml { path, .. } => path,
        }
    }

    /// Returns `true` when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_path_and_not_found_kind() {
        let err = SourceError::Io {
            path: PathBuf::from("effects.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(err.is_not_found());
        assert_eq!(err.path(), std::path::Path::new("effects.json"));
        assert!(err.to_string().starts_with("failed to read effects.json"));
    }

    #[test]
    fn parse_errors_are_not_not_found() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SourceError::Json {
            path: PathBuf::from("synonyms.json"),
            source,
        };

        assert!(!err.is_not_found());
        assert!(err.to_string().contains("synonyms.json"));
    }
}
