//! Pagination Module
//!
//! The visible-page window shared by pagination controls and the preloader,
//! plus the page-count arithmetic used on both sides of the API.

use serde::Serialize;

/// Number of page buttons shown at once
pub const WINDOW_SIZE: u32 = 5;

// == Visible Pages ==
/// Pages shown in the pagination bar for `current_page` of `total_pages`.
///
/// - `total ≤ 5`: every page
/// - near the start (`current < 3`): pages 1-5
/// - near the end (`current > total - 2`): the last five pages
/// - otherwise: two pages either side of `current`
pub fn visible_pages(current_page: u32, total_pages: u32) -> Vec<u32> {
    if total_pages <= WINDOW_SIZE {
        return (1..=total_pages).collect();
    }

    if current_page < 3 {
        return (1..=WINDOW_SIZE).collect();
    }

    if current_page > total_pages - 2 {
        return (total_pages - (WINDOW_SIZE - 1)..=total_pages).collect();
    }

    (current_page - 2..=current_page + 2).collect()
}

// == Total Pages ==
/// Ceiling of `total_items / per_page`; zero items means zero pages.
pub fn total_pages(total_items: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

// == Pagination ==
/// Navigation state of a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Page buttons to render.
    pub fn pages(&self) -> Vec<u32> {
        visible_pages(self.current_page, self.total_pages)
    }

    /// False on the first page, where "First" and "Previous" are disabled.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// False on the last page, where "Next" and "Last" are disabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn first(&self) -> u32 {
        1
    }

    pub fn last(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }
}
