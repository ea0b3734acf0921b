#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod identifiers;
pub mod locator;
pub mod models;
pub mod naming;
pub mod project;
pub mod report;
pub mod resolver;
pub mod suggest;
pub mod synonyms;

pub use config::ResolverConfig;
pub use error::SourceError;
pub use locator::{AssetProbe, FilesystemProbe, locate_icon};
pub use models::{MissingIcon, ResolutionReport, ResolutionResult, ResolvedIcon, StorageTier};
pub use naming::{generate_icon_candidates, name_variants};
pub use project::{IconProjectLayout, ResolverInputs};
pub use resolver::IconResolver;
pub use synonyms::{BuiltinSynonyms, SynonymSource, SynonymTable};
