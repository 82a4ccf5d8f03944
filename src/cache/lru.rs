//! LRU Order Module
//!
//! Implements the recency order as an index-linked list over a flat arena.

use std::iter::FusedIterator;

use crate::cache::entry::{Entry, NIL};

/// Upper bound on slots reserved up front; larger caches grow on demand.
pub(crate) const MAX_PREALLOCATED_SLOTS: usize = 1024;

// == Recency List ==
/// Doubly linked recency order stored in a `Vec` arena.
///
/// Entries are linked by slot index rather than by reference:
/// - `head` = Most recently used
/// - `tail` = Least recently used
///
/// Slots freed by [`RecencyList::pop_back`] are recycled by later pushes, so a
/// cache at steady state stops allocating.
#[derive(Debug, Clone)]
pub(crate) struct RecencyList<T> {
    /// Arena of occupied and vacant slots
    slots: Vec<Entry<T>>,
    /// Indices of vacant slots
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates an empty list sized for roughly `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.min(MAX_PREALLOCATED_SLOTS)),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a value as the most recently used entry.
    ///
    /// Returns the slot index, which stays valid until the entry is popped.
    pub(crate) fn push_front(&mut self, value: T) -> usize {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].refill(value);
                idx
            }
            None => {
                self.slots.push(Entry::new(value));
                self.slots.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks an occupied slot as most recently used.
    ///
    /// The relative order of every other entry is unchanged.
    pub(crate) fn move_to_front(&mut self, idx: usize) {
        debug_assert!(self.slots[idx].is_occupied(), "moving a vacant slot");
        if idx == self.head {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Pop Back ==
    /// Removes and returns the least recently used value.
    ///
    /// Returns None if the list is empty.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        let idx = self.tail;
        self.unlink(idx);
        let value = self.slots[idx].vacate();
        self.free.push(idx);
        self.len -= 1;
        value
    }

    // == Front / Back ==
    /// Returns the most recently used value.
    pub(crate) fn front(&self) -> Option<&T> {
        self.value_at(self.head)
    }

    /// Returns the least recently used value.
    pub(crate) fn back(&self) -> Option<&T> {
        self.value_at(self.tail)
    }

    // == Length ==
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    // == Iter ==
    /// Iterates from most to least recently used.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn value_at(&self, idx: usize) -> Option<&T> {
        if idx == NIL {
            return None;
        }
        self.slots[idx].value.as_ref()
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        self.slots[idx].prev = NIL;
        self.slots[idx].next = old_head;
        if old_head == NIL {
            self.tail = idx;
        } else {
            self.slots[old_head].prev = idx;
        }
        self.head = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }
        self.slots[idx].detach();
    }

    #[cfg(test)]
    pub(crate) fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx).and_then(|entry| entry.value.as_ref())
    }

    #[cfg(test)]
    pub(crate) fn arena_len(&self) -> usize {
        self.slots.len()
    }
}

// == Iterator ==
/// Borrowing iterator over resident values, most recently used first.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let entry = &self.list.slots[self.cursor];
        self.cursor = entry.next;
        self.remaining -= 1;
        entry.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}
