use super::SynonymSource;

/// Name reported for entries that come from the built-in synonym set.
pub const BUILTIN_SOURCE_NAME: &str = "builtin";

const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    ("bait_switch", "baitandswitch"),
    ("bait-switch", "baitandswitch"),
    ("bait and switch", "baitandswitch"),
];

/// Minimal hard-coded synonyms for identifiers whose icon names drifted beyond what the
/// normaliser can recover.
pub fn builtin_synonyms() -> SynonymSource {
    SynonymSource::from_pairs(BUILTIN_SOURCE_NAME, BUILTIN_SYNONYMS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_bait_switch_family_to_single_stem() {
        let source = builtin_synonyms();
        assert_eq!(source.name(), BUILTIN_SOURCE_NAME);
        assert!(source.entries().all(|(_, stem)| stem == "baitandswitch"));
        assert!(source.entries().any(|(key, _)| key == "bait_switch"));
    }
}
