//! Windowed page residency
//!
//! Only the current page and its immediate neighbors are ever resident or
//! queued for prefetch. The window caps downstream rendering and fetch work
//! at three pages regardless of notebook size.

use smallvec::SmallVec;

use crate::layout::Page;

/// Pages that must be loaded and visible for `current_page`
///
/// `current_page` is clamped into `[1, total]` first, so an out-of-range
/// value still yields a sensible window. Page numbers are contiguous from 1,
/// so the window is a subslice of the full sequence.
pub fn visible_pages(pages: &[Page], current_page: u32) -> &[Page] {
    if pages.is_empty() {
        return &[];
    }
    let total = pages.len() as u32;
    let current = current_page.clamp(1, total);
    let low = current.saturating_sub(1).max(1);
    let high = (current + 1).min(total);
    &pages[(low - 1) as usize..high as usize]
}

/// Page numbers worth prefetching next: previous, then next, where they exist
pub fn preload_adjacent_pages(current_page: u32, total_pages: u32) -> SmallVec<[u32; 2]> {
    let mut targets = SmallVec::new();
    if total_pages == 0 {
        return targets;
    }
    if current_page > 1 {
        targets.push(current_page - 1);
    }
    if current_page < total_pages {
        targets.push(current_page + 1);
    }
    targets
}
