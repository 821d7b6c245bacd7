//! Uniqueness checks over slices.

use std::collections::HashSet;
use std::hash::Hash;

/// Find the first element that is equal to an earlier one.
#[must_use]
pub fn first_duplicate<T: Eq + Hash>(items: &[T]) -> Option<&T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item))
}

/// True when no two elements of `items` are equal
#[must_use]
pub fn elements_are_unique<T: Eq + Hash>(items: &[T]) -> bool {
    first_duplicate(items).is_none()
}
