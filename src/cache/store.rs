//! Page Cache Store Module
//!
//! Maps page numbers to cached pages, with lazy expiry and
//! insertion-order eviction.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{
    CacheEntry, CacheStats, InsertionOrder, DEFAULT_CACHE_EXPIRY, DEFAULT_MAX_CACHE_SIZE,
};
use crate::models::Note;
use crate::pagination::visible_pages;

// == Page Cache ==
/// Bounded, time-expiring store of note pages.
#[derive(Debug)]
pub struct PageCache {
    /// Page number to cached page
    entries: HashMap<u32, CacheEntry>,
    /// Eviction order
    order: InsertionOrder,
    stats: CacheStats,
    /// Maximum number of entries kept after any `set`
    max_entries: usize,
    /// Age beyond which an entry is treated as absent
    expiry: Duration,
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CACHE_SIZE, DEFAULT_CACHE_EXPIRY)
    }
}

impl PageCache {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `max_entries` - Number of pages kept before the oldest is evicted
    /// * `expiry` - Lifetime of a cached page
    pub fn new(max_entries: usize, expiry: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries,
            expiry,
        }
    }

    // == Get ==
    /// Returns the page if it is cached and not expired.
    ///
    /// An expired entry is removed as a side effect.
    pub fn get(&mut self, page: u32) -> Option<CacheEntry> {
        if !self.is_live(page) {
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(&page).cloned()
    }

    // == Set ==
    /// Stores a page with a fresh timestamp, overwriting any previous entry.
    ///
    /// Overwriting keeps the page's original insertion position. When the
    /// number of pages exceeds the bound, the earliest-inserted page is
    /// evicted; a single insert can only exceed the bound by one.
    pub fn set(&mut self, page: u32, notes: Vec<Note>, total_pages: u32) {
        self.entries.insert(page, CacheEntry::new(notes, total_pages));
        self.order.record(page);

        if self.entries.len() > self.max_entries {
            if let Some(oldest) = self.order.evict_oldest() {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
                debug!("Evicted page {} from cache", oldest);
            }
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Preload Pages ==
    /// Pages in the visible window around `current_page` that are not
    /// cached, ascending.
    ///
    /// Only mutates the cache by dropping expired entries it runs into.
    pub fn preload_pages(&mut self, current_page: u32, total_pages: u32) -> Vec<u32> {
        let mut pages: Vec<u32> = visible_pages(current_page, total_pages)
            .into_iter()
            .filter(|page| !self.is_live(*page))
            .collect();
        pages.dedup();
        pages
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of stored entries, expired ones included until touched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// True when `page` holds an unexpired entry; drops it if expired.
    fn is_live(&mut self, page: u32) -> bool {
        let expired = match self.entries.get(&page) {
            Some(entry) => entry.is_expired(self.expiry),
            None => return false,
        };

        if expired {
            self.entries.remove(&page);
            self.order.remove(page);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            debug!("Page {} expired from cache", page);
            return false;
        }

        true
    }
}
