use proptest::prelude::*;
use transsheet::catalog::StringBucket;
use transsheet::glossary::{ConversionType, Glossary, GlossaryEntry};
use transsheet::reference_id::{self, ALPHABET};
use transsheet::tag;
use transsheet::{Error, StringEntry};
use uuid::Uuid;

const TAGS: [&str; 4] = [tag::TAG_CRLF, tag::TAG_CR, tag::TAG_LF, tag::TAG_TAB];

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 <>\\r\\n\\tあ-ん漢字]{0,40}").expect("valid text regex")
}

fn key_set_strategy() -> impl Strategy<Value = Vec<u128>> {
    prop::collection::btree_set(any::<u128>(), 0..12).prop_map(|set| set.into_iter().collect())
}

fn bucket(id: &str, keys: &[u128]) -> StringBucket {
    let mut bucket = StringBucket::new(id);
    for key in keys {
        bucket
            .add_entry(StringEntry::new(Uuid::from_u128(*key), "text"))
            .expect("unique key");
    }
    bucket
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tag_round_trip_restores_text(text in text_strategy()) {
        prop_assume!(TAGS.iter().all(|t| !text.contains(t)));
        prop_assert_eq!(tag::unescape(&tag::escape(&text)), text.clone());
        prop_assert_eq!(tag::decode_cell(&tag::encode_cell(&text, false), false), text);
    }

    #[test]
    fn escaped_text_has_no_controls(text in text_strategy()) {
        let escaped = tag::escape(&text);
        prop_assert!(!escaped.contains('\r'));
        prop_assert!(!escaped.contains('\n'));
        prop_assert!(!escaped.contains('\t'));
    }

    #[test]
    fn reference_id_is_deterministic_and_in_alphabet(raw in any::<u128>()) {
        let key = Uuid::from_u128(raw);
        let first = reference_id::for_key(&key);
        let second = reference_id::for_key(&key);
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.is_empty());
        prop_assert!(first.chars().all(|c| ALPHABET.contains(c)));
    }

    #[test]
    fn disjoint_merge_sums_counts(keys in key_set_strategy(), split in 0usize..12) {
        let split = split.min(keys.len());
        let (left, right) = keys.split_at(split);
        let mut merged = bucket("enGB", left);
        merged.merge(bucket("ENGB", right)).expect("disjoint merge");
        prop_assert_eq!(merged.len(), left.len() + right.len());
    }

    #[test]
    fn overlapping_merge_fails_without_change(keys in key_set_strategy(), extra in any::<u128>()) {
        prop_assume!(!keys.is_empty());
        prop_assume!(!keys.contains(&extra));
        let mut existing = bucket("enGB", &keys);
        let incoming = bucket("enGB", &[extra, keys[0]]);

        let result = existing.merge(incoming);
        let is_duplicate = matches!(result, Err(Error::DuplicateKey { .. }));
        prop_assert!(is_duplicate);
        prop_assert_eq!(existing.len(), keys.len());
        prop_assert!(!existing.contains_key(&Uuid::from_u128(extra)));
    }

    #[test]
    fn substitution_without_variables_is_identity(text in "[A-Za-z0-9 ,.!?]{0,40}") {
        let glossary = Glossary::from_entries(vec![GlossaryEntry::new(
            ConversionType::NounTranslate,
            "",
            "Dragon",
            "ドラゴン",
        )])
        .expect("glossary");
        let result = glossary
            .substitute(&text, ConversionType::NounTranslate, "")
            .expect("default pattern");
        prop_assert!(!result.replaced);
        prop_assert_eq!(result.text, text);
    }
}
