//! Cache Entry Module
//!
//! A single cached page of notes with the instant it was stored.

use std::time::{Duration, Instant};

use crate::models::Note;

// == Cache Entry ==
/// One page of notes as returned by the backend.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Notes on the page, in server order
    pub notes: Vec<Note>,
    /// Total page count reported alongside this page
    pub total_pages: u32,
    /// When the entry was stored; used only for expiry
    pub timestamp: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(notes: Vec<Note>, total_pages: u32) -> Self {
        Self {
            notes,
            total_pages,
            timestamp: Instant::now(),
        }
    }

    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.timestamp.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `expiry`.
    ///
    /// An entry exactly `expiry` old is still live; it expires once its age
    /// is strictly greater.
    pub fn is_expired(&self, expiry: Duration) -> bool {
        self.age() > expiry
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(Vec::new(), 4);

        assert!(entry.notes.is_empty());
        assert_eq!(entry.total_pages, 4);
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(Vec::new(), 1);
        let expiry = Duration::from_millis(50);

        assert!(!entry.is_expired(expiry));

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired(expiry));
        assert!(entry.age() > expiry);
    }

    #[test]
    fn test_backdated_entry_is_expired() {
        let Some(old) = Instant::now().checked_sub(Duration::from_secs(301)) else {
            return;
        };
        let entry = CacheEntry {
            notes: Vec::new(),
            total_pages: 1,
            timestamp: old,
        };

        assert!(entry.is_expired(Duration::from_secs(300)));
    }
}
