//! Insertion Order Module
//!
//! Tracks the order in which pages entered the cache so eviction never
//! depends on map iteration order.

use std::collections::VecDeque;

// == Insertion Order ==
/// Records page numbers in the order they were first inserted.
///
/// - Front = inserted earliest (next to evict)
/// - Back = inserted most recently
///
/// Re-recording a page that is already tracked leaves its position alone;
/// reads never reorder anything.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    order: VecDeque<u32>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Appends a page unless it is already tracked.
    pub fn record(&mut self, page: u32) {
        if !self.contains(page) {
            self.order.push_back(page);
        }
    }

    // == Remove ==
    /// Stops tracking a page.
    pub fn remove(&mut self, page: u32) {
        self.order.retain(|p| *p != page);
    }

    // == Evict Oldest ==
    /// Returns and forgets the earliest-inserted page.
    pub fn evict_oldest(&mut self) -> Option<u32> {
        self.order.pop_front()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, page: u32) -> bool {
        self.order.contains(&page)
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let mut order = InsertionOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
        assert_eq!(order.evict_oldest(), None);
    }

    #[test]
    fn test_record_keeps_first_insertion() {
        let mut order = InsertionOrder::new();

        order.record(1);
        order.record(2);
        order.record(3);
        // Re-recording does not move page 1 to the back
        order.record(1);

        assert_eq!(order.len(), 3);
        assert_eq!(order.evict_oldest(), Some(1));
    }

    #[test]
    fn test_evict_oldest_in_insertion_order() {
        let mut order = InsertionOrder::new();

        order.record(7);
        order.record(3);
        order.record(5);

        assert_eq!(order.evict_oldest(), Some(7));
        assert_eq!(order.evict_oldest(), Some(3));
        assert_eq!(order.evict_oldest(), Some(5));
        assert_eq!(order.evict_oldest(), None);
    }

    #[test]
    fn test_remove_then_record_moves_to_back() {
        let mut order = InsertionOrder::new();

        order.record(1);
        order.record(2);
        order.remove(1);
        order.record(1);

        assert_eq!(order.evict_oldest(), Some(2));
        assert_eq!(order.evict_oldest(), Some(1));
    }

    #[test]
    fn test_remove_untracked_page() {
        let mut order = InsertionOrder::new();

        order.record(1);
        order.remove(42);

        assert_eq!(order.len(), 1);
        assert!(order.contains(1));
    }

    #[test]
    fn test_clear() {
        let mut order = InsertionOrder::new();

        order.record(1);
        order.record(2);
        order.clear();

        assert!(order.is_empty());
    }
}
