//! Page Cache Module
//!
//! Bounded, time-expiring cache of note pages keyed by page number.
//! Eviction follows insertion order, not access order.

mod entry;
mod order;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::PageCache;

// == Public Constants ==
/// Maximum number of live pages held by default
pub const DEFAULT_MAX_CACHE_SIZE: usize = 5;

/// Age after which a cached page is treated as absent
pub const DEFAULT_CACHE_EXPIRY: Duration = Duration::from_secs(5 * 60);

/// Page cache shared between the fetcher and its background preloads.
pub type SharedPageCache = Arc<RwLock<PageCache>>;

/// Wraps a cache for sharing across tasks.
pub fn shared(cache: PageCache) -> SharedPageCache {
    Arc::new(RwLock::new(cache))
}
