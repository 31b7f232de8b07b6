//! Paper-Diary: the notebook reading core of a personal diary
//!
//! This crate provides the paginated "paper notebook" engine with:
//! - Approximate height estimation with no text-measurement dependency
//! - Greedy entry-to-page packing, memoized with explicit invalidation
//! - A bounded resident-page window (current page ± 1)
//! - Two-level paper/font style inheritance (entry over notebook)
//!
//! Entries and notebooks come from external stores; the presentation layer
//! feeds them in, renders the visible window, and drives navigation intents
//! through [`Reader`].

pub mod layout;
pub mod model;
pub mod nav;
pub mod prefs;
pub mod style;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmReader;

// Re-export primary types
pub use layout::{HeightEstimator, LayoutError, Page, PageSide, Paginator, USABLE_HEIGHT_RATIO};
pub use model::{Entry, EntryId, Notebook, NotebookId};
pub use nav::{PageRange, ReaderSession, TocEntry};
pub use prefs::{PreferenceStore, ReaderPreferences, ViewMode};
pub use style::{resolve_font_settings, resolve_style, FontSettings, PaperStyle};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use smallvec::SmallVec;

/// One reader view over a notebook: entries, pagination, and session state
///
/// The facade repaginates whenever the entry set, viewport height, or font
/// size changes, and keeps the session's page position clamped to the
/// resulting book. Parameter setters commit only when pagination succeeds.
pub struct Reader {
    entries: Vec<Entry>,
    paginator: Paginator,
    viewport_height: f32,
    font_size: f32,
    pages: Arc<[Page]>,
    session: ReaderSession,
}

impl Reader {
    /// Create a reader over an empty notebook
    pub fn new(viewport_height: f32, font_size: f32) -> Result<Self, LayoutError> {
        let mut paginator = Paginator::new();
        let pages = paginator.calculate_pages(&[], viewport_height, font_size)?;
        Ok(Self {
            entries: Vec::new(),
            paginator,
            viewport_height,
            font_size,
            pages,
            session: ReaderSession::new(0),
        })
    }

    /// Create a reader with initial entries, sorted chronologically by the caller
    pub fn with_entries(
        entries: Vec<Entry>,
        viewport_height: f32,
        font_size: f32,
    ) -> Result<Self, LayoutError> {
        let mut reader = Self::new(viewport_height, font_size)?;
        reader.set_entries(entries)?;
        Ok(reader)
    }

    /// Replace the entry set and repaginate
    ///
    /// Drops all memoized pagination first: entry content may have changed
    /// under unchanged ids.
    pub fn set_entries(&mut self, entries: Vec<Entry>) -> Result<(), LayoutError> {
        self.paginator.clear_cache();
        let pages =
            self.paginator
                .calculate_pages(&entries, self.viewport_height, self.font_size)?;
        self.entries = entries;
        self.adopt_pages(pages);
        Ok(())
    }

    /// Change the viewport height and repaginate
    pub fn set_viewport_height(&mut self, viewport_height: f32) -> Result<(), LayoutError> {
        let pages =
            self.paginator
                .calculate_pages(&self.entries, viewport_height, self.font_size)?;
        self.viewport_height = viewport_height;
        self.adopt_pages(pages);
        Ok(())
    }

    /// Change the font size and repaginate
    pub fn set_font_size(&mut self, font_size: f32) -> Result<(), LayoutError> {
        let pages =
            self.paginator
                .calculate_pages(&self.entries, self.viewport_height, font_size)?;
        self.font_size = font_size;
        self.adopt_pages(pages);
        Ok(())
    }

    fn adopt_pages(&mut self, pages: Arc<[Page]>) {
        self.session.set_total_pages(pages.len() as u32);
        self.pages = pages;
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn current_page(&self) -> u32 {
        self.session.current_page()
    }

    pub fn total_pages(&self) -> u32 {
        self.session.total_pages()
    }

    pub fn loaded_range(&self) -> Option<PageRange> {
        self.session.loaded_range()
    }

    /// The current page plus one loaded neighbor on each side
    pub fn visible_pages(&self) -> &[Page] {
        nav::visible_pages(&self.pages, self.session.current_page())
    }

    /// Page numbers worth prefetching from the current position
    pub fn preload_targets(&self) -> SmallVec<[u32; 2]> {
        nav::preload_adjacent_pages(self.session.current_page(), self.session.total_pages())
    }

    /// Jump to an absolute page number
    pub fn navigate_to_page(&mut self, page: u32) -> bool {
        self.session.navigate_to_page(page)
    }

    /// Turn to the next page, if any
    pub fn navigate_next(&mut self) -> bool {
        self.session.navigate_next()
    }

    /// Turn back to the previous page, if any
    pub fn navigate_previous(&mut self) -> bool {
        self.session.navigate_previous()
    }

    /// Jump to the page holding the first entry on the target calendar day
    ///
    /// No-op returning false when no entry matches.
    pub fn jump_to_date(&mut self, date: DateTime<Utc>) -> bool {
        match nav::jump_to_date(&self.pages, date) {
            Some(page) => self.session.navigate_to_page(page),
            None => false,
        }
    }

    /// Jump to the page holding the given entry
    pub fn jump_to_entry(&mut self, entry_id: &str) -> bool {
        match nav::find_page_by_entry(&self.pages, entry_id) {
            Some(page) => self.session.navigate_to_page(page),
            None => false,
        }
    }

    /// All entries annotated with their host page, in traversal order
    pub fn table_of_contents(&self) -> Vec<TocEntry> {
        nav::table_of_contents(&self.pages)
    }

    /// Bookmarked entries annotated with their host page
    pub fn bookmarked_entries(&self) -> Vec<TocEntry> {
        nav::bookmarked_entries(&self.pages)
    }
}
