//! Change notifications and the read-only view handed to observers.
//!
//! Observers subscribe to a [`TagSet`] and receive a [`TagSetChange`] for
//! every successful mutation. Delivery goes through a `tokio` broadcast
//! channel, so sending never blocks and does not need a runtime. A receiver
//! that falls more than the channel capacity behind sees
//! `RecvError::Lagged` / `TryRecvError::Lagged` and should resynchronise from
//! the view.

use super::priority::Priority;
use super::set::TagSet;
use super::types::Tag;
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::slice;
use std::sync::OnceLock;
use tokio::sync::broadcast;
use tracing::trace;

/// Number of undelivered changes buffered per tag set before receivers lag.
pub const DEFAULT_CHANGE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// A change applied to a [`TagSet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSetChange {
    /// The whole contents were replaced; carries the new contents.
    Replaced(Vec<Tag>),
    Added(Tag),
    Removed(Tag),
    /// Tags appended by a merge, in the order they were appended.
    Merged(Vec<Tag>),
}

/// Lazily created broadcast sender owned by a tag set.
pub(crate) struct ChangeNotifier {
    capacity: NonZeroUsize,
    sender: OnceLock<broadcast::Sender<TagSetChange>>,
}

impl ChangeNotifier {
    pub(crate) const fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            sender: OnceLock::new(),
        }
    }

    pub(crate) const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<TagSetChange> {
        self.sender
            .get_or_init(|| broadcast::channel(self.capacity.get()).0)
            .subscribe()
    }

    /// Send a change to current subscribers.
    ///
    /// `change` is only evaluated when someone is listening.
    pub(crate) fn notify<F>(&self, change: F)
    where
        F: FnOnce() -> TagSetChange,
    {
        let Some(sender) = self.sender.get() else {
            return;
        };
        if sender.receiver_count() == 0 {
            return;
        }
        match sender.send(change()) {
            Ok(receivers) => trace!(receivers, "Delivered tag set change"),
            Err(_) => trace!("Tag set change dropped, no subscribers left"),
        }
    }
}

/// A copy gets its own channel; subscribers stay with the original.
impl Clone for ChangeNotifier {
    fn clone(&self) -> Self {
        Self::new(self.capacity)
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("capacity", &self.capacity)
            .field(
                "subscribers",
                &self.sender.get().map_or(0, broadcast::Sender::receiver_count),
            )
            .finish()
    }
}

/// Read-only projection of a [`TagSet`].
///
/// Exposes the current tags and a change subscription without any way to
/// mutate the underlying set.
#[derive(Debug, Clone, Copy)]
pub struct TagSetView<'set> {
    set: &'set TagSet,
}

impl<'set> TagSetView<'set> {
    pub(crate) const fn new(set: &'set TagSet) -> Self {
        Self { set }
    }

    #[must_use]
    pub fn iter(&self) -> slice::Iter<'set, Tag> {
        self.set.as_slice().iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &'set [Tag] {
        self.set.as_slice()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'set Tag> {
        self.set.as_slice().get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.set.contains(tag)
    }

    #[must_use]
    pub fn contains_priority_tag(&self) -> bool {
        self.set.contains_priority_tag()
    }

    #[must_use]
    pub fn contains_overlap_tag(&self) -> bool {
        self.set.contains_overlap_tag()
    }

    #[must_use]
    pub fn priority(&self) -> Option<Priority> {
        self.set.priority()
    }

    #[must_use]
    pub fn to_set(&self) -> HashSet<Tag> {
        self.set.to_set()
    }

    /// Subscribe to changes of the underlying set
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<TagSetChange> {
        self.set.subscribe()
    }
}

impl<'set> IntoIterator for TagSetView<'set> {
    type Item = &'set Tag;
    type IntoIter = slice::Iter<'set, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.as_slice().iter()
    }
}
