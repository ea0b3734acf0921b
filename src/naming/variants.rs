use std::collections::BTreeSet;

use super::slug::{collapse_whitespace, loose_slug, underscore_key};

/// Expand a raw identifier into its ordered syntactic variants.
///
/// The underscore key comes first, followed by its hyphen and space spellings, then slugs of
/// the whitespace-collapsed base forms, the lower-cased original, and finally the base forms
/// verbatim so that the original casing is still tried as a last resort. Duplicates keep their
/// first position. Blank input yields no variants.
pub fn name_variants(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut builder = VariantBuilder::new(trimmed);

    builder.add_separator_variants();
    builder.add_base_form_slugs();
    builder.add_lowercase_original();
    builder.add_verbatim_base_forms();

    builder.finish()
}

struct VariantBuilder<'a> {
    original: &'a str,
    key: String,
    base_forms: [String; 4],
    list: UniqueList,
}

impl<'a> VariantBuilder<'a> {
    fn new(original: &'a str) -> Self {
        Self {
            original,
            key: underscore_key(original),
            base_forms: [
                original.to_string(),
                collapse_whitespace(original, "-"),
                collapse_whitespace(original, "_"),
                collapse_whitespace(original, ""),
            ],
            list: UniqueList::default(),
        }
    }

    fn add_separator_variants(&mut self) {
        let key = self.key.clone();
        self.list.push(key.clone());

        if key.contains('_') {
            self.list.push(key.replace('_', "-"));
            self.list.push(key.replace('_', " "));
        }
        if key.contains('-') {
            self.list.push(key.replace('-', "_"));
            self.list.push(key.replace('-', " "));
        }
    }

    fn add_base_form_slugs(&mut self) {
        for form in &self.base_forms {
            self.list.push(loose_slug(form));
        }
    }

    fn add_lowercase_original(&mut self) {
        self.list.push(self.original.to_lowercase());
    }

    fn add_verbatim_base_forms(&mut self) {
        for form in &self.base_forms {
            self.list.push(form.clone());
        }
    }

    fn finish(self) -> Vec<String> {
        self.list.into_vec()
    }
}

/// Insertion-ordered list that ignores exact duplicates and blank values.
#[derive(Debug, Default)]
pub(super) struct UniqueList {
    seen: BTreeSet<String>,
    result: Vec<String>,
}

impl UniqueList {
    pub(super) fn push(&mut self, value: String) {
        if value.trim().is_empty() {
            return;
        }
        if self.seen.insert(value.clone()) {
            self.result.push(value);
        }
    }

    pub(super) fn into_vec(self) -> Vec<String> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::name_variants;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn returns_empty_for_blank_input() {
        assert!(name_variants("").is_empty());
        assert!(name_variants("   \t").is_empty());
    }

    #[test]
    fn expands_underscore_identifiers() {
        assert_eq!(
            name_variants("bait_switch"),
            strings(&["bait_switch", "bait-switch", "bait switch"])
        );
    }

    #[test]
    fn expands_hyphenated_identifiers_and_keeps_original_casing_last() {
        assert_eq!(
            name_variants("Maneki-Neko"),
            strings(&["maneki-neko", "maneki_neko", "maneki neko", "Maneki-Neko"])
        );
    }

    #[test]
    fn expands_spaced_identifiers_through_base_forms() {
        assert_eq!(
            name_variants("  Bait and Switch "),
            strings(&[
                "bait_and_switch",
                "bait-and-switch",
                "bait and switch",
                "baitandswitch",
                "Bait and Switch",
                "Bait-and-Switch",
                "Bait_and_Switch",
                "BaitandSwitch",
            ])
        );
    }

    #[test]
    fn emits_both_separator_families_for_mixed_keys() {
        assert_eq!(
            name_variants("Sky-High Jump"),
            strings(&[
                "sky-high_jump",
                "sky-high-jump",
                "sky-high jump",
                "sky_high_jump",
                "sky high_jump",
                "sky-highjump",
                "Sky-High Jump",
                "Sky-High-Jump",
                "Sky-High_Jump",
                "Sky-HighJump",
            ])
        );
    }

    #[test]
    fn skips_blank_variants_from_punctuation_only_input() {
        assert_eq!(name_variants("!!!"), strings(&["___", "---", "!!!"]));
    }

    #[test]
    fn never_repeats_a_variant() {
        for raw in ["Maneki-Neko", "a b-c_d", "Fire's Fury", "x", "A  B"] {
            let variants = name_variants(raw);
            let mut unique = variants.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), variants.len(), "duplicates for {raw:?}");
        }
    }
}
