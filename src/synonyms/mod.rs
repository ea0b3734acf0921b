//! Synonym sources and the merged lookup table consulted before mechanical name variants.
//!
//! Sources are ordered: the built-in set first, then hand-curated overrides, then
//! auto-generated fuzzy suggestions. The first source to define a key owns it.

mod builtin;
mod source;
mod table;

pub use builtin::{BUILTIN_SOURCE_NAME, builtin_synonyms};
pub use source::SynonymSource;
pub use table::{BuiltinSynonyms, SynonymEntry, SynonymTable, normalize_lookup_key};
