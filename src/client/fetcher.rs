//! Notes Fetcher
//!
//! Cache-first page loading with a fail-soft fallback, plus background
//! preloading of the pages around the current one.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

use super::error::ClientError;
use super::source::NotesSource;
use crate::cache::SharedPageCache;
use crate::models::Note;
use crate::pagination::total_pages;

/// A page ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesPage {
    pub notes: Vec<Note>,
    pub total_pages: u32,
}

impl NotesPage {
    /// What the UI shows when a page could not be loaded.
    pub fn empty() -> Self {
        Self {
            notes: Vec::new(),
            total_pages: 1,
        }
    }
}

// == Notes Fetcher ==
/// Loads pages through a [`NotesSource`], consulting the page cache first.
#[derive(Clone)]
pub struct NotesFetcher {
    source: Arc<dyn NotesSource>,
    cache: SharedPageCache,
    per_page: u32,
}

impl NotesFetcher {
    pub fn new(source: Arc<dyn NotesSource>, cache: SharedPageCache, per_page: u32) -> Self {
        Self {
            source,
            cache,
            per_page,
        }
    }

    pub fn cache(&self) -> &SharedPageCache {
        &self.cache
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    // == Fetch Page ==
    /// Returns page `page`, from the cache when possible.
    ///
    /// Never fails: a transport, status or parse error is logged and
    /// answered with an empty single-page result, which is not cached.
    pub async fn fetch_page(&self, page: u32) -> NotesPage {
        let cached = self.cache.write().await.get(page);
        if let Some(entry) = cached {
            debug!("Loading page {} from cache", page);
            return NotesPage {
                notes: entry.notes,
                total_pages: entry.total_pages,
            };
        }

        info!("Fetching page {} from server", page);
        match load_page(self.source.as_ref(), &self.cache, page, self.per_page).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Error fetching notes for page {}: {}", page, e);
                NotesPage::empty()
            }
        }
    }

    // == Preload ==
    /// Fetches every uncached page in the visible window around
    /// `current_page`, concurrently, and waits for all of them.
    ///
    /// A failed page is logged and skipped; it does not affect the others.
    /// Returns how many pages were cached.
    pub async fn preload(&self, current_page: u32, total_pages: u32) -> usize {
        let pages = self
            .cache
            .write()
            .await
            .preload_pages(current_page, total_pages);
        if pages.is_empty() {
            return 0;
        }

        info!("Background loading pages: {:?}", pages);

        let mut tasks = JoinSet::new();
        for page in pages {
            let source = Arc::clone(&self.source);
            let cache = Arc::clone(&self.cache);
            let per_page = self.per_page;
            tasks.spawn(async move {
                let outcome = load_page(source.as_ref(), &cache, page, per_page).await;
                (page, outcome)
            });
        }

        let mut cached = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(_))) => cached += 1,
                Ok((page, Err(e))) => warn!("Error preloading page {}: {}", page, e),
                Err(e) => warn!("Preload task did not complete: {}", e),
            }
        }
        cached
    }

    /// Runs [`preload`](Self::preload) in the background.
    ///
    /// The returned handle may be dropped; the preload keeps running and its
    /// cache writes still land.
    pub fn spawn_preload(&self, current_page: u32, total_pages: u32) -> JoinHandle<usize> {
        let fetcher = self.clone();
        tokio::spawn(async move { fetcher.preload(current_page, total_pages).await })
    }
}

/// One network fetch; caches and returns the page on success.
async fn load_page(
    source: &dyn NotesSource,
    cache: &SharedPageCache,
    page: u32,
    per_page: u32,
) -> Result<NotesPage, ClientError> {
    let raw = source.fetch_page(page, per_page).await?;
    let total = total_pages(raw.total_count, per_page);

    cache.write().await.set(page, raw.notes.clone(), total);

    Ok(NotesPage {
        notes: raw.notes,
        total_pages: total,
    })
}
