//! Navigation: page windowing, lookups, and the reader session

mod index;
mod session;
mod window;

pub use index::{
    bookmarked_entries, find_page_by_entry, is_valid_page_number, jump_to_date,
    table_of_contents, TocEntry,
};
pub use session::{PageRange, ReaderSession};
pub use window::{preload_adjacent_pages, visible_pages};
