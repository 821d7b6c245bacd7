//! Property-based tests for tag set invariants.
//!
//! Uses `proptest` to generate arbitrary tag names and operation sequences and
//! checks uniqueness, priority exclusivity on insertion, and the all-or-nothing
//! behaviour of failing operations.

use proptest::prelude::*;
use std::collections::HashSet;
use tasktags::utils::elements_are_unique;
use tasktags::{Tag, TagError, TagSet};

// ─────────────────────────────────────────────────────────────────────────────
// Strategies
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a tag name, biased towards the reserved names.
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-e]{1,2}",
        1 => prop_oneof![
            Just("HIGH".to_string()),
            Just("MEDIUM".to_string()),
            Just("LOW".to_string()),
            Just("OVERLAP".to_string()),
        ],
    ]
}

fn arb_tag() -> impl Strategy<Value = Tag> {
    arb_name().prop_map(|name| Tag::new(&name).expect("generated names are valid"))
}

fn priority_count(set: &TagSet) -> usize {
    set.iter().filter(|t| t.is_priority_tag()).count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn distinct_tags_construct_and_match_to_set(tags in prop::collection::hash_set(arb_tag(), 0..12)) {
        let input: Vec<Tag> = tags.iter().cloned().collect();
        let set = TagSet::from_tags(input).expect("distinct input");
        prop_assert_eq!(set.to_set(), tags);
    }

    #[test]
    fn duplicate_input_is_rejected(tags in prop::collection::vec(arb_tag(), 1..12), pick in any::<prop::sample::Index>()) {
        let mut input = tags.clone();
        let duplicate = pick.get(&tags).clone();
        input.push(duplicate);

        let result = TagSet::from_tags(input);
        prop_assert!(matches!(result, Err(TagError::DuplicateTag(_))));
    }

    #[test]
    fn add_keeps_invariants(start in prop::collection::hash_set(arb_tag(), 0..6), additions in prop::collection::vec(arb_tag(), 0..20)) {
        let mut set = TagSet::from_tags(start.into_iter().filter(|t| !t.is_priority_tag())).expect("distinct");

        for tag in additions {
            let before = set.clone();
            match set.add(tag.clone()) {
                Ok(()) => {
                    prop_assert!(set.contains(&tag));
                    prop_assert!(priority_count(&set) <= 1);
                    if !tag.is_priority_tag() {
                        prop_assert_eq!(set.len(), before.len() + 1);
                    }
                }
                Err(TagError::DuplicateTag(name)) => {
                    prop_assert_eq!(name, tag.name());
                    prop_assert_eq!(&set, &before);
                }
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
            prop_assert!(elements_are_unique(set.as_slice()));
        }
    }

    #[test]
    fn merge_is_superset_preserving_order(a in prop::collection::hash_set(arb_tag(), 0..8), b in prop::collection::hash_set(arb_tag(), 0..8)) {
        let mut left = TagSet::from_trusted_set(a);
        let right = TagSet::from_trusted_set(b);
        let original = left.clone();

        left.merge_from(&right);

        prop_assert!(right.iter().all(|t| left.contains(t)));
        prop_assert_eq!(left.as_slice().get(..original.len()), Some(original.as_slice()));
        prop_assert!(elements_are_unique(left.as_slice()));

        let expected: HashSet<Tag> = original.to_set().union(&right.to_set()).cloned().collect();
        prop_assert_eq!(left.to_set(), expected);
    }

    #[test]
    fn order_insensitive_equality_matches_set_equality(a in prop::collection::hash_set(arb_tag(), 0..8), b in prop::collection::hash_set(arb_tag(), 0..8)) {
        let left = TagSet::from_trusted_set(a.clone());
        let right = TagSet::from_trusted_set(b.clone());
        prop_assert_eq!(left.equals_order_insensitive(&right), a == b);
        if left == right {
            prop_assert!(left.equals_order_insensitive(&right));
        }
    }
}
