//! Derived navigation lookups over the page sequence
//!
//! All projections here are read-only scans in page order, then in-page
//! order. They are recomputed from the current page sequence on demand and
//! never cached or persisted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::layout::Page;
use crate::model::EntryId;

/// Flattened, page-annotated projection of an entry for navigation UIs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    pub entry_id: EntryId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub page_number: u32,
}

impl TocEntry {
    fn project(entry: &crate::model::Entry, page_number: u32) -> Self {
        Self {
            entry_id: entry.id.clone(),
            title: entry.title.clone(),
            date: entry.date,
            page_number,
        }
    }
}

/// Page hosting the first entry written on the target calendar day
///
/// Matches on year/month/day only; time-of-day on either side is ignored.
/// `None` when no entry falls on that day.
pub fn jump_to_date(pages: &[Page], target: DateTime<Utc>) -> Option<u32> {
    let target_day = target.date_naive();
    for page in pages {
        for entry in &page.entries {
            if entry.date.date_naive() == target_day {
                return Some(page.number);
            }
        }
    }
    None
}

/// All entries in traversal order, annotated with their host page
///
/// No sorting and no deduplication: the order is page order, then in-page
/// order, which for sorted input is chronological anyway.
pub fn table_of_contents(pages: &[Page]) -> Vec<TocEntry> {
    pages
        .iter()
        .flat_map(|page| {
            page.entries
                .iter()
                .map(|entry| TocEntry::project(entry, page.number))
        })
        .collect()
}

/// Bookmarked entries in traversal order, annotated with their host page
pub fn bookmarked_entries(pages: &[Page]) -> Vec<TocEntry> {
    pages
        .iter()
        .flat_map(|page| {
            page.entries
                .iter()
                .filter(|entry| entry.bookmarked)
                .map(|entry| TocEntry::project(entry, page.number))
        })
        .collect()
}

/// Page hosting the entry with the given id, if any
pub fn find_page_by_entry(pages: &[Page], entry_id: &str) -> Option<u32> {
    for page in pages {
        if page.entries.iter().any(|entry| entry.id == entry_id) {
            return Some(page.number);
        }
    }
    None
}

/// Whether `page` is a usable page number for a book of `total_pages`
///
/// Always false for an empty book: no integer satisfies `1 <= n <= 0`.
pub fn is_valid_page_number(page: u32, total_pages: u32) -> bool {
    (1..=total_pages).contains(&page)
}
