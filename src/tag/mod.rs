//! Tag module.
//!
//! This module provides the tag types attached to tasks:
//! - `Tag`, a validated label compared by name
//! - `TagSet`, an ordered collection that rejects duplicates and keeps at
//!   most one priority tag (HIGH, MEDIUM, LOW) on insertion
//! - Change subscriptions and a read-only view for observers

mod observe;
mod priority;
mod set;
mod types;

pub use observe::{TagSetChange, TagSetView, DEFAULT_CHANGE_CAPACITY};
pub use priority::{evict_priority_tags, Priority};
pub use set::TagSet;
pub use types::{
    validate_tag_name, Tag, TagError, HIGH_PRIORITY_TAG_NAME, LOW_PRIORITY_TAG_NAME,
    MEDIUM_PRIORITY_TAG_NAME, OVERLAP_TAG_NAME, PRIORITY_TAG_NAMES,
};
