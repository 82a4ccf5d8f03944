//! Cache Entry Module
//!
//! Defines the arena slot that holds one resident value and its recency links.

/// Link value meaning "no neighbour".
pub(crate) const NIL: usize = usize::MAX;

// == Entry ==
/// One slot of the recency arena.
///
/// A slot is either occupied (`value` is `Some`) and linked into the recency
/// order, or vacant and parked on the free list with both links set to [`NIL`].
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    /// The stored value, `None` while the slot is vacant
    pub(crate) value: Option<T>,
    /// Index of the next more recently used entry
    pub(crate) prev: usize,
    /// Index of the next less recently used entry
    pub(crate) next: usize,
}

impl<T> Entry<T> {
    // == Constructor ==
    /// Creates an occupied, unlinked entry.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value: Some(value),
            prev: NIL,
            next: NIL,
        }
    }

    // == Refill ==
    /// Reuses a vacant slot for a new value.
    pub(crate) fn refill(&mut self, value: T) {
        debug_assert!(self.value.is_none(), "refilling an occupied slot");
        self.value = Some(value);
        self.detach();
    }

    // == Vacate ==
    /// Takes the value out and clears both links.
    pub(crate) fn vacate(&mut self) -> Option<T> {
        self.detach();
        self.value.take()
    }

    /// Clears both links.
    pub(crate) fn detach(&mut self) {
        self.prev = NIL;
        self.next = NIL;
    }

    /// Returns true if the slot currently holds a value.
    pub(crate) fn is_occupied(&self) -> bool {
        self.value.is_some()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new_is_unlinked() {
        let entry = Entry::new(7);
        assert!(entry.is_occupied());
        assert_eq!(entry.prev, NIL);
        assert_eq!(entry.next, NIL);
    }

    #[test]
    fn test_entry_vacate_and_refill() {
        let mut entry = Entry::new("a");
        entry.prev = 3;
        entry.next = 4;

        assert_eq!(entry.vacate(), Some("a"));
        assert!(!entry.is_occupied());
        assert_eq!(entry.prev, NIL);
        assert_eq!(entry.next, NIL);

        entry.refill("b");
        assert_eq!(entry.value, Some("b"));
    }
}
