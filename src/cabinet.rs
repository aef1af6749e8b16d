//! Insertion-ordered item storage with optional capacity and oldest-first eviction.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::types::Item;

/// Items stored front-to-back by recency; the back holds the oldest item.
#[derive(Debug, Clone)]
pub struct Cabinet {
    // None means unbounded.
    capacity: Option<NonZeroUsize>,
    storage: VecDeque<Item>,
}

/// Position of an item found by [`Cabinet::find`].
///
/// Holds the cabinet borrowed, so it can only be spent on the cabinet that
/// produced it and never survives another mutation.
#[derive(Debug)]
pub struct Slot<'a> {
    cabinet: &'a mut Cabinet,
    index: usize,
}

impl Slot<'_> {
    /// Remove the located item from its cabinet and return it.
    pub fn remove(self) -> Item {
        self.cabinet
            .storage
            .remove(self.index)
            .expect("slot index out of bounds")
    }
}

impl Cabinet {
    /// Create a cabinet holding at most `capacity` items.
    pub fn bounded(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).expect("cabinet capacity must be > 0");
        Self {
            capacity: Some(capacity),
            storage: VecDeque::with_capacity(capacity.get()),
        }
    }

    /// Create a cabinet that never evicts.
    pub fn unbounded() -> Self {
        Self {
            capacity: None,
            storage: VecDeque::new(),
        }
    }

    /// Put an item at the front; if the cabinet was full, the oldest item
    /// is taken out first and returned.
    pub fn insert_front(&mut self, item: Item) -> Option<Item> {
        debug_assert!(!self.contains(item), "item {item} is already stored here");
        let evicted = if self.is_full() {
            self.storage.pop_back()
        } else {
            None
        };
        self.storage.push_front(item);
        debug_assert!(!self.over_capacity(), "cabinet exceeded its capacity");
        evicted
    }

    /// Linear search for an item.
    pub fn find(&mut self, item: Item) -> Option<Slot<'_>> {
        let index = self.storage.iter().position(|&stored| stored == item)?;
        Some(Slot {
            cabinet: self,
            index,
        })
    }

    /// Take out the oldest item, if any.
    pub fn remove_oldest(&mut self) -> Option<Item> {
        self.storage.pop_back()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.storage.contains(&item)
    }

    pub fn is_full(&self) -> bool {
        match self.capacity {
            Some(capacity) => self.storage.len() >= capacity.get(),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Configured capacity; `None` for an unbounded cabinet.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity.map(NonZeroUsize::get)
    }

    /// Items from newest (front) to oldest (back).
    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.storage.iter().copied()
    }

    fn over_capacity(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.storage.len() > capacity.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(cabinet: &Cabinet) -> Vec<Item> {
        cabinet.iter().collect()
    }

    #[test]
    fn inserts_newest_at_front() {
        let mut cabinet = Cabinet::bounded(3);
        assert_eq!(cabinet.insert_front(1), None);
        assert_eq!(cabinet.insert_front(2), None);
        assert_eq!(contents(&cabinet), vec![2, 1]);
        assert!(!cabinet.is_full());
    }

    #[test]
    fn full_cabinet_evicts_oldest() {
        let mut cabinet = Cabinet::bounded(2);
        cabinet.insert_front(1);
        cabinet.insert_front(2);
        assert!(cabinet.is_full());
        // The back (oldest) item makes room for the new one.
        assert_eq!(cabinet.insert_front(3), Some(1));
        assert_eq!(contents(&cabinet), vec![3, 2]);
        assert_eq!(cabinet.len(), 2);
    }

    #[test]
    fn unbounded_never_evicts() {
        let mut outside = Cabinet::unbounded();
        for item in 0..2048 {
            assert_eq!(outside.insert_front(item), None);
        }
        assert!(!outside.is_full());
        assert_eq!(outside.len(), 2048);
        assert_eq!(outside.capacity(), None);
    }

    #[test]
    fn find_then_remove_yields_same_item() {
        let mut cabinet = Cabinet::bounded(4);
        for item in [7, -3, 42] {
            cabinet.insert_front(item);
        }
        let slot = cabinet.find(-3).expect("item should be found");
        assert_eq!(slot.remove(), -3);
        assert_eq!(contents(&cabinet), vec![42, 7]);
        assert!(cabinet.find(-3).is_none());
    }

    #[test]
    fn find_misses_on_absent_item() {
        let mut cabinet = Cabinet::bounded(1);
        assert!(cabinet.find(5).is_none());
        cabinet.insert_front(6);
        assert!(cabinet.find(5).is_none());
    }

    #[test]
    fn extreme_values_are_ordinary_items() {
        let mut cabinet = Cabinet::bounded(2);
        cabinet.insert_front(i64::MAX);
        cabinet.insert_front(i64::MIN);
        assert!(cabinet.contains(i64::MAX));
        assert_eq!(cabinet.find(i64::MAX).map(Slot::remove), Some(i64::MAX));
    }

    #[test]
    fn remove_oldest_drains_back_to_front() {
        let mut cabinet = Cabinet::bounded(3);
        assert_eq!(cabinet.remove_oldest(), None);
        cabinet.insert_front(1);
        cabinet.insert_front(2);
        assert_eq!(cabinet.remove_oldest(), Some(1));
        assert_eq!(cabinet.remove_oldest(), Some(2));
        assert!(cabinet.is_empty());
    }

    #[test]
    #[should_panic(expected = "cabinet capacity must be > 0")]
    fn zero_capacity_panics() {
        let _ = Cabinet::bounded(0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "already stored here")]
    fn duplicate_insert_panics_in_debug() {
        let mut cabinet = Cabinet::bounded(2);
        cabinet.insert_front(9);
        cabinet.insert_front(9);
    }
}
