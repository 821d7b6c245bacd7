//! Priority tags.
//!
//! HIGH, MEDIUM and LOW are ordinary tags with reserved names. A tag set holds
//! at most one of them after an insertion; adding a new priority evicts
//! whichever one was there before.

use super::types::{Tag, HIGH_PRIORITY_TAG_NAME, LOW_PRIORITY_TAG_NAME, MEDIUM_PRIORITY_TAG_NAME};
use std::fmt;

/// A task priority expressed as a reserved tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities, highest first
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// The reserved tag name for this priority
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => HIGH_PRIORITY_TAG_NAME,
            Self::Medium => MEDIUM_PRIORITY_TAG_NAME,
            Self::Low => LOW_PRIORITY_TAG_NAME,
        }
    }

    /// Look up the priority a tag name marks. Matching is exact.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|priority| priority.as_str() == name)
    }

    /// The tag carrying this priority
    #[must_use]
    pub fn tag(self) -> Tag {
        Tag::reserved(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remove every priority tag from `tags`.
///
/// Returns the evicted tags in their original order. Non-priority tags keep
/// their relative order.
pub fn evict_priority_tags(tags: &mut Vec<Tag>) -> Vec<Tag> {
    let (evicted, kept): (Vec<Tag>, Vec<Tag>) =
        std::mem::take(tags).into_iter().partition(Tag::is_priority_tag);
    *tags = kept;
    evicted
}
