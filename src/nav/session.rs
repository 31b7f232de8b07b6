//! Reader session state machine
//!
//! Session-scoped navigation state for one reader view: the current page,
//! the total, and the inclusive range of loaded pages. Out-of-range targets
//! are warned and ignored; the first and last page absorb further
//! previous/next requests without error or wraparound.

use log::warn;

use crate::nav::index::is_valid_page_number;

/// Inclusive range of page numbers currently loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub low: u32,
    pub high: u32,
}

impl PageRange {
    pub fn contains(&self, page: u32) -> bool {
        (self.low..=self.high).contains(&page)
    }
}

/// Navigation state for one reader view
///
/// `loaded_range` is `None` only in the no-pages state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderSession {
    current_page: u32,
    total_pages: u32,
    loaded_range: Option<PageRange>,
}

impl ReaderSession {
    /// Start a session at page 1, or in the no-pages state
    pub fn new(total_pages: u32) -> Self {
        let mut session = Self {
            current_page: 1,
            total_pages,
            loaded_range: None,
        };
        if total_pages > 0 {
            session.loaded_range = Some(session.range_around(1));
        }
        session
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn loaded_range(&self) -> Option<PageRange> {
        self.loaded_range
    }

    fn range_around(&self, page: u32) -> PageRange {
        PageRange {
            low: page.saturating_sub(1).max(1),
            high: (page + 1).min(self.total_pages),
        }
    }

    /// Jump to an absolute page number
    ///
    /// Out-of-range targets leave the state unchanged and return false.
    pub fn navigate_to_page(&mut self, page: u32) -> bool {
        if !is_valid_page_number(page, self.total_pages) {
            warn!(
                "ignoring navigation to page {page}, valid range is 1..={}",
                self.total_pages
            );
            return false;
        }
        self.current_page = page;
        self.loaded_range = Some(self.range_around(page));
        true
    }

    /// Advance one page; the last page is absorbing
    pub fn navigate_next(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.navigate_to_page(self.current_page + 1)
        } else {
            false
        }
    }

    /// Go back one page; the first page is absorbing
    pub fn navigate_previous(&mut self) -> bool {
        if self.total_pages > 0 && self.current_page > 1 {
            self.navigate_to_page(self.current_page - 1)
        } else {
            false
        }
    }

    /// Repagination hook: adopt a new total, keeping the reading position
    ///
    /// The current page is clamped into the new range rather than reset, so
    /// a font-size change that shrinks the book keeps the reader nearby.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
        if total_pages == 0 {
            self.current_page = 1;
            self.loaded_range = None;
        } else {
            self.current_page = self.current_page.clamp(1, total_pages);
            self.loaded_range = Some(self.range_around(self.current_page));
        }
    }
}
