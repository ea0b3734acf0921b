//! Structured document loading shared by the configuration, identifier and synonym readers.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::SourceError;

/// Serialization format of an input document, chosen from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// Anything else; read line by line.
    PlainText,
}

impl DocumentFormat {
    /// Pick the format for the provided path.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::PlainText,
        }
    }
}

/// Read a file into a string, attaching the path to any I/O failure.
pub(crate) fn read_text(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserialize `content` using `format`. Plain text documents are treated as JSON so that
/// extension-less configuration files keep working.
pub(crate) fn parse_structured<T: DeserializeOwned>(
    path: &Path,
    format: DocumentFormat,
    content: &str,
) -> Result<T, SourceError> {
    match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|source| SourceError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        DocumentFormat::Toml => toml::from_str(content).map_err(|source| SourceError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        DocumentFormat::Json | DocumentFormat::PlainText => {
            serde_json::from_str(content).map_err(|source| SourceError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn detects_formats_from_extensions() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.txt")), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::from_path(Path::new("effects")), DocumentFormat::PlainText);
    }

    #[test]
    fn parses_each_structured_format() {
        let path = Path::new("doc");
        let json: BTreeMap<String, String> =
            parse_structured(path, DocumentFormat::Json, r#"{"a": "b"}"#).unwrap();
        let yaml: BTreeMap<String, String> =
            parse_structured(path, DocumentFormat::Yaml, "a: b\n").unwrap();
        let toml: BTreeMap<String, String> =
            parse_structured(path, DocumentFormat::Toml, "a = \"b\"\n").unwrap();

        assert_eq!(json, yaml);
        assert_eq!(yaml, toml);
    }

    #[test]
    fn attaches_path_to_parse_failures() {
        let err = parse_structured::<BTreeMap<String, String>>(
            Path::new("broken.toml"),
            DocumentFormat::Toml,
            "a = ",
        )
        .unwrap_err();
        assert!(matches!(err, SourceError::Toml { .. }));
        assert_eq!(err.path(), Path::new("broken.toml"));
    }
}
