//! Greedy entry-to-page packing with memoized results
//!
//! Entries arrive pre-sorted chronologically and are packed into pages in
//! input order. An entry is atomic: it is never split across two pages, even
//! when its estimate alone exceeds the usable height.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHasher};
use serde::Serialize;
use thiserror::Error;

use crate::layout::estimate::HeightEstimator;
use crate::model::Entry;

/// Fraction of the viewport available to entries; the rest is reserved for
/// page chrome (headers, footers, margins)
pub const USABLE_HEIGHT_RATIO: f32 = 0.85;

/// Placement of a page in a two-page spread, from page-number parity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSide {
    Left,
    Right,
}

impl PageSide {
    /// Odd page numbers sit on the right of the spread
    pub fn from_number(number: u32) -> Self {
        if number % 2 == 1 {
            PageSide::Right
        } else {
            PageSide::Left
        }
    }
}

/// One page of the notebook
///
/// Page numbers are 1-based and contiguous in emission order; entries keep
/// the relative order of the input sequence.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub number: u32,
    pub side: PageSide,
    pub entries: Vec<Entry>,
}

/// Layout precondition violation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("viewport height must be positive, got {0}")]
    InvalidViewportHeight(f32),
    #[error("font size must be positive, got {0}")]
    InvalidFontSize(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    entry_ids: u64,
    viewport_bits: u32,
    font_bits: u32,
}

impl CacheKey {
    fn new(entries: &[Entry], viewport_height: f32, font_size: f32) -> Self {
        let mut hasher = FxHasher::default();
        for entry in entries {
            entry.id.hash(&mut hasher);
        }
        Self {
            entry_ids: hasher.finish(),
            viewport_bits: viewport_height.to_bits(),
            font_bits: font_size.to_bits(),
        }
    }
}

/// Packs entries into pages and memoizes the result
///
/// The memo table is keyed by the entry identity sequence plus the layout
/// parameters. Entry content can change without its id changing, so callers
/// replacing or editing entries must [`clear_cache`](Paginator::clear_cache)
/// before recomputing.
pub struct Paginator {
    estimator: HeightEstimator,
    cache: FxHashMap<CacheKey, Arc<[Page]>>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self::with_estimator(HeightEstimator::default())
    }

    pub fn with_estimator(estimator: HeightEstimator) -> Self {
        Self {
            estimator,
            cache: FxHashMap::default(),
        }
    }

    pub fn estimator(&self) -> &HeightEstimator {
        &self.estimator
    }

    /// Pack `entries` into pages for the given viewport and font size
    ///
    /// Empty input yields an empty page list. Repeated calls with unchanged
    /// inputs return the memoized sequence.
    pub fn calculate_pages(
        &mut self,
        entries: &[Entry],
        viewport_height: f32,
        font_size: f32,
    ) -> Result<Arc<[Page]>, LayoutError> {
        if !(viewport_height > 0.0) {
            return Err(LayoutError::InvalidViewportHeight(viewport_height));
        }
        if !(font_size > 0.0) {
            return Err(LayoutError::InvalidFontSize(font_size));
        }

        let key = CacheKey::new(entries, viewport_height, font_size);
        if let Some(pages) = self.cache.get(&key) {
            return Ok(Arc::clone(pages));
        }

        let pages: Arc<[Page]> = self
            .paginate(entries, viewport_height, font_size)
            .into();
        self.cache.insert(key, Arc::clone(&pages));
        Ok(pages)
    }

    fn paginate(&self, entries: &[Entry], viewport_height: f32, font_size: f32) -> Vec<Page> {
        let usable_height = viewport_height * USABLE_HEIGHT_RATIO;

        let mut pages = Vec::new();
        let mut current: Vec<Entry> = Vec::new();
        let mut used_height: f32 = 0.0;

        for entry in entries {
            let height = self.estimator.estimate(entry, font_size);

            // Close the page only if it already holds something; an entry
            // taller than the page still gets a page of its own.
            if used_height + height > usable_height && !current.is_empty() {
                push_page(&mut pages, std::mem::take(&mut current));
                used_height = 0.0;
            }

            current.push(entry.clone());
            used_height += height;
        }

        if !current.is_empty() {
            push_page(&mut pages, current);
        }

        pages
    }

    /// Drop all memoized results
    ///
    /// Required whenever entry content changes out-of-band, since the memo
    /// key only covers entry identity.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of memoized page sequences
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }
}

fn push_page(pages: &mut Vec<Page>, entries: Vec<Entry>) {
    let number = pages.len() as u32 + 1;
    pages.push(Page {
        number,
        side: PageSide::from_number(number),
        entries,
    });
}
