//! Common test utilities

use tasktags::{Tag, TagSet};

/// Build a tag, panicking on an invalid name
pub fn tag(name: &str) -> Tag {
    Tag::new(name).expect("test tag names are valid")
}

/// Build a tag set from names, panicking on invalid or duplicate names
pub fn tag_set(names: &[&str]) -> TagSet {
    TagSet::from_names(names).expect("test tag sets are valid")
}

/// Collect the names of a tag set in iteration order
pub fn names(set: &TagSet) -> Vec<String> {
    set.iter().map(|t| t.name().to_string()).collect()
}
