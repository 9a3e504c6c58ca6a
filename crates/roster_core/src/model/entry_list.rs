//! Position-addressed nested list used at every array level of a form.
//!
//! # Invariants
//! - Order is insertion order; no sorting or deduplication.
//! - Removing an out-of-range index never changes the list.

use std::slice::{Iter, IterMut};
use uuid::Uuid;

/// Ephemeral UI identity of one working-copy entry.
///
/// Never persisted and never used for addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey(Uuid);

impl EntryKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EntryKey {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of nested entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList<T> {
    entries: Vec<T>,
}

impl<T> EntryList<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends one entry at the end and returns its index.
    pub fn append(&mut self, entry: T) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Removes the entry at `index`.
    ///
    /// Returns `None` without touching the list when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.entries.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for EntryList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a EntryList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryKey, EntryList};

    #[test]
    fn append_keeps_insertion_order() {
        let mut list = EntryList::new();
        assert_eq!(list.append("a"), 0);
        assert_eq!(list.append("b"), 1);
        assert_eq!(list.as_slice(), &["a", "b"]);
    }

    #[test]
    fn remove_at_shifts_following_entries() {
        let mut list: EntryList<_> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(list.remove_at(1), Some("b"));
        assert_eq!(list.as_slice(), &["a", "c"]);
    }

    #[test]
    fn remove_at_len_is_noop() {
        let mut list: EntryList<_> = ["a", "b"].into_iter().collect();
        assert_eq!(list.remove_at(2), None);
        assert_eq!(list.remove_at(usize::MAX), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn entry_keys_are_distinct() {
        assert_ne!(EntryKey::new(), EntryKey::new());
    }
}
