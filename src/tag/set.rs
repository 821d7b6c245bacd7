//! Duplicate-free tag collection with mutually exclusive priority tags.
//!
//! Every mutating operation either succeeds completely or returns an error
//! and leaves the set untouched. Uniqueness is checked before anything is
//! written, so a caller that catches [`TagError::DuplicateTag`] still holds
//! the previous contents.

use super::observe::{ChangeNotifier, TagSetChange, TagSetView, DEFAULT_CHANGE_CAPACITY};
use super::priority::{evict_priority_tags, Priority};
use super::types::{Tag, TagError, OVERLAP_TAG_NAME};
use crate::utils::{elements_are_unique, first_duplicate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::{slice, vec};
use tokio::sync::broadcast;
use tracing::debug;

/// An ordered collection of unique tags.
///
/// Insertion order is kept for iteration and for `==`. Use
/// [`TagSet::equals_order_insensitive`] to compare contents only.
///
/// [`TagSet::add`] keeps at most one priority tag (HIGH, MEDIUM, LOW) in the
/// set. [`TagSet::merge_from`] and [`TagSet::from_trusted_set`] do not apply
/// that rule.
#[derive(Serialize, Deserialize)]
#[serde(try_from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagSet {
    tags: Vec<Tag>,
    notifier: ChangeNotifier,
}

impl TagSet {
    /// Create an empty tag set
    #[must_use]
    pub fn new() -> Self {
        Self::from_vec_unchecked(Vec::new())
    }

    /// Build a tag set from raw names.
    ///
    /// Fails with [`TagError::InvalidTagName`] on the first name that is not a
    /// valid tag, or [`TagError::DuplicateTag`] if two names produce equal tags.
    pub fn from_names<I>(names: I) -> Result<Self, TagError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let tags = names
            .into_iter()
            .map(|name| Tag::new(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut set = Self::new();
        set.set_all(tags)?;
        Ok(set)
    }

    /// Build a tag set from tags that must be pairwise distinct.
    pub fn from_tags<I>(tags: I) -> Result<Self, TagError>
    where
        I: IntoIterator<Item = Tag>,
    {
        let tags: Vec<Tag> = tags.into_iter().collect();
        ensure_unique(&tags)?;
        Ok(Self::from_vec_unchecked(tags))
    }

    /// Build a tag set from a hash set without re-checking uniqueness.
    ///
    /// The iteration order of the source decides the order of the result.
    /// The priority rule is not applied; the caller is responsible for the
    /// contents.
    #[must_use]
    pub fn from_trusted_set(tags: HashSet<Tag>) -> Self {
        Self::from_vec_unchecked(tags.into_iter().collect())
    }

    /// Copy `source` into an independent tag set.
    ///
    /// The copy has the same tags in the same order but its own subscribers.
    #[must_use]
    pub fn copy_of(source: &Self) -> Self {
        source.clone()
    }

    /// Set how many undelivered changes are buffered for subscribers.
    ///
    /// Subscribers registered before this call are disconnected.
    #[must_use]
    pub fn with_change_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.notifier = ChangeNotifier::new(capacity);
        self
    }

    fn from_vec_unchecked(tags: Vec<Tag>) -> Self {
        let set = Self {
            tags,
            notifier: ChangeNotifier::new(DEFAULT_CHANGE_CAPACITY),
        };
        set.debug_check_unique();
        set
    }

    /// All tags as a hash set. Changes to the result do not affect `self`.
    #[must_use]
    pub fn to_set(&self) -> HashSet<Tag> {
        self.tags.iter().cloned().collect()
    }

    /// Replace the contents with `tags`.
    ///
    /// On [`TagError::DuplicateTag`] nothing changes and no change is
    /// published.
    pub fn set_all<I>(&mut self, tags: I) -> Result<(), TagError>
    where
        I: IntoIterator<Item = Tag>,
    {
        let replacement: Vec<Tag> = tags.into_iter().collect();
        ensure_unique(&replacement)?;
        self.replace(replacement);
        Ok(())
    }

    /// Replace the contents with those of another tag set
    pub fn set_all_from(&mut self, replacement: &Self) {
        self.replace(replacement.tags.clone());
    }

    fn replace(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
        self.debug_check_unique();
        debug!(count = self.tags.len(), "Replaced tag set contents");
        self.notifier.notify(|| TagSetChange::Replaced(self.tags.clone()));
    }

    /// Append every tag of `other` that is not already present.
    ///
    /// Existing tags keep their positions; new ones follow in `other`'s order.
    /// Priority tags are merged like any other tag, so the result can hold
    /// more than one of them.
    pub fn merge_from(&mut self, other: &Self) {
        let added: Vec<Tag> = {
            let already_inside: HashSet<&Tag> = self.tags.iter().collect();
            other
                .tags
                .iter()
                .filter(|tag| !already_inside.contains(tag))
                .cloned()
                .collect()
        };

        if added.is_empty() {
            return;
        }

        self.tags.extend_from_slice(&added);
        self.debug_check_unique();
        debug!(added = added.len(), "Merged tags");
        self.notifier.notify(move || TagSetChange::Merged(added));
    }

    /// Returns true if an equal tag is present
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns true if a tag with exactly this name is present
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name() == name)
    }

    /// Returns true if the reserved OVERLAP tag is present
    #[must_use]
    pub fn contains_overlap_tag(&self) -> bool {
        self.contains_name(OVERLAP_TAG_NAME)
    }

    /// Returns true if any of HIGH, MEDIUM or LOW is present
    #[must_use]
    pub fn contains_priority_tag(&self) -> bool {
        self.tags.iter().any(Tag::is_priority_tag)
    }

    /// The first priority found in the set, if any
    #[must_use]
    pub fn priority(&self) -> Option<Priority> {
        self.tags.iter().find_map(Tag::priority)
    }

    /// Add a tag.
    ///
    /// A priority tag replaces whatever priority tags are already present;
    /// other tags are appended. Adding a tag that is already present fails
    /// with [`TagError::DuplicateTag`] and leaves the set unchanged.
    pub fn add(&mut self, tag: Tag) -> Result<(), TagError> {
        if self.contains(&tag) {
            return Err(TagError::DuplicateTag(tag.into_name()));
        }

        let is_priority = tag.is_priority_tag();
        if is_priority && self.contains_priority_tag() {
            for evicted in evict_priority_tags(&mut self.tags) {
                debug!(tag = %evicted, replacement = %tag, "Evicted priority tag");
                self.notifier.notify(move || TagSetChange::Removed(evicted));
            }
        }

        debug!(tag = %tag, "Added tag");
        self.tags.push(tag);
        self.debug_check_unique();
        debug_assert!(
            !is_priority || self.tags.iter().filter(|t| t.is_priority_tag()).count() == 1,
            "priority tag added alongside another priority tag"
        );

        if let Some(added) = self.tags.last() {
            self.notifier.notify(|| TagSetChange::Added(added.clone()));
        }
        Ok(())
    }

    /// Returns true if both sets hold the same tags, in any order
    #[must_use]
    pub fn equals_order_insensitive(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let mine: HashSet<&Tag> = self.tags.iter().collect();
        let theirs: HashSet<&Tag> = other.tags.iter().collect();
        mine == theirs
    }

    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Read-only view for observers (e.g. a UI layer)
    #[must_use]
    pub const fn as_view(&self) -> TagSetView<'_> {
        TagSetView::new(self)
    }

    /// Subscribe to changes made by later mutations.
    ///
    /// Failed operations publish nothing.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TagSetChange> {
        self.notifier.subscribe()
    }

    /// Buffer size used for change subscriptions
    #[must_use]
    pub const fn change_capacity(&self) -> NonZeroUsize {
        self.notifier.capacity()
    }

    fn debug_check_unique(&self) {
        debug_assert!(
            elements_are_unique(&self.tags),
            "tag set contains duplicate tags"
        );
    }
}

fn ensure_unique(tags: &[Tag]) -> Result<(), TagError> {
    match first_duplicate(tags) {
        Some(duplicate) => Err(TagError::DuplicateTag(duplicate.name().to_string())),
        None => Ok(()),
    }
}

impl Default for TagSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TagSet {
    fn clone(&self) -> Self {
        Self {
            tags: self.tags.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.tags == other.tags
    }
}

impl Eq for TagSet {}

impl Hash for TagSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tags.hash(state);
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagSet")
            .field("tags", &self.tags)
            .field("notifier", &self.notifier)
            .finish()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tag) in self.tags.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

impl<'set> IntoIterator for &'set TagSet {
    type Item = &'set Tag;
    type IntoIter = slice::Iter<'set, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl IntoIterator for TagSet {
    type Item = Tag;
    type IntoIter = vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl From<HashSet<Tag>> for TagSet {
    fn from(tags: HashSet<Tag>) -> Self {
        Self::from_trusted_set(tags)
    }
}

impl From<BTreeSet<Tag>> for TagSet {
    fn from(tags: BTreeSet<Tag>) -> Self {
        Self::from_vec_unchecked(tags.into_iter().collect())
    }
}

impl TryFrom<Vec<Tag>> for TagSet {
    type Error = TagError;

    fn try_from(tags: Vec<Tag>) -> Result<Self, Self::Error> {
        Self::from_tags(tags)
    }
}

impl From<TagSet> for Vec<Tag> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod set_tests;
