use crate::synonyms::SynonymTable;

use super::variants::{UniqueList, name_variants};

/// Generate the ordered filename stems to try for an effect identifier.
///
/// A synonym override for the identifier always comes first; the mechanical variants from
/// [`name_variants`] follow in their fixed order. Deduplication is exact and case-sensitive
/// because several storage backends treat filenames that way.
pub fn generate_icon_candidates(identifier: &str, table: &SynonymTable) -> Vec<String> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut list = UniqueList::default();

    if let Some(stem) = table.lookup(trimmed) {
        list.push(stem.to_string());
    }

    for variant in name_variants(trimmed) {
        list.push(variant);
    }

    list.into_vec()
}
