//! Where the fetcher gets pages from.

use async_trait::async_trait;

use super::error::ClientError;
use crate::models::Note;

/// One page as delivered by the backend, before page counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub notes: Vec<Note>,
    /// Total number of notes across all pages
    pub total_count: u64,
}

/// A paginated listing of notes.
#[async_trait]
pub trait NotesSource: Send + Sync {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<RawPage, ClientError>;
}
