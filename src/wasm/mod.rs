//! WASM bindings for the reader
//!
//! The JS side owns fetching and rendering; this bridge moves entries in as
//! JSON, navigation intents in as method calls, and page/TOC projections out
//! as JSON. Traffic is per navigation event, not per frame.

use chrono::{TimeZone, Utc};
use wasm_bindgen::prelude::*;

use crate::model::{Entry, Notebook};
use crate::style;
use crate::Reader;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-exposed reader wrapper
#[wasm_bindgen]
pub struct WasmReader {
    reader: Reader,
}

#[wasm_bindgen]
impl WasmReader {
    /// Create a reader for the given viewport height and font size
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_height: f32, font_size: f32) -> Result<WasmReader, JsValue> {
        let reader = Reader::new(viewport_height, font_size).map_err(js_error)?;
        Ok(Self { reader })
    }

    /// Replace the entry set from a JSON array, pre-sorted by date ascending
    #[wasm_bindgen(js_name = loadEntries)]
    pub fn load_entries(&mut self, entries_json: &str) -> Result<(), JsValue> {
        let entries: Vec<Entry> = serde_json::from_str(entries_json).map_err(js_error)?;
        self.reader.set_entries(entries).map_err(js_error)
    }

    /// Change the viewport height and repaginate
    #[wasm_bindgen(js_name = setViewportHeight)]
    pub fn set_viewport_height(&mut self, viewport_height: f32) -> Result<(), JsValue> {
        self.reader
            .set_viewport_height(viewport_height)
            .map_err(js_error)
    }

    /// Change the font size and repaginate
    #[wasm_bindgen(js_name = setFontSize)]
    pub fn set_font_size(&mut self, font_size: f32) -> Result<(), JsValue> {
        self.reader.set_font_size(font_size).map_err(js_error)
    }

    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> u32 {
        self.reader.current_page()
    }

    #[wasm_bindgen(js_name = totalPages)]
    pub fn total_pages(&self) -> u32 {
        self.reader.total_pages()
    }

    /// Turn to the next page
    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) -> bool {
        self.reader.navigate_next()
    }

    /// Turn back to the previous page
    #[wasm_bindgen(js_name = previousPage)]
    pub fn previous_page(&mut self) -> bool {
        self.reader.navigate_previous()
    }

    /// Jump to an absolute 1-based page number
    #[wasm_bindgen(js_name = jumpToPage)]
    pub fn jump_to_page(&mut self, page: u32) -> bool {
        self.reader.navigate_to_page(page)
    }

    /// Jump to the first entry written on the given calendar day
    #[wasm_bindgen(js_name = jumpToDate)]
    pub fn jump_to_date(&mut self, date: &js_sys::Date) -> bool {
        let millis = date.get_time();
        if millis.is_nan() {
            return false;
        }
        match Utc.timestamp_millis_opt(millis as i64).single() {
            Some(date) => self.reader.jump_to_date(date),
            None => false,
        }
    }

    /// Jump to the page holding the given entry
    #[wasm_bindgen(js_name = jumpToEntry)]
    pub fn jump_to_entry(&mut self, entry_id: &str) -> bool {
        self.reader.jump_to_entry(entry_id)
    }

    /// JSON array of the loaded page window (current page ± 1)
    #[wasm_bindgen(js_name = visiblePages)]
    pub fn visible_pages(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.reader.visible_pages()).map_err(js_error)
    }

    /// Page numbers worth prefetching from the current position
    #[wasm_bindgen(js_name = preloadTargets)]
    pub fn preload_targets(&self) -> Vec<u32> {
        self.reader.preload_targets().to_vec()
    }

    /// JSON array of all entries annotated with their host page
    #[wasm_bindgen(js_name = tableOfContents)]
    pub fn table_of_contents(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.reader.table_of_contents()).map_err(js_error)
    }

    /// JSON array of bookmarked entries annotated with their host page
    #[wasm_bindgen(js_name = bookmarkedEntries)]
    pub fn bookmarked_entries(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.reader.bookmarked_entries()).map_err(js_error)
    }
}

/// Resolve the effective paper style for an entry/notebook pair
///
/// Either argument may be absent; the fallback is `"blank"`.
#[wasm_bindgen(js_name = resolveStyle)]
pub fn resolve_style_json(
    entry_json: Option<String>,
    notebook_json: Option<String>,
) -> Result<String, JsValue> {
    let entry: Option<Entry> = match entry_json {
        Some(json) => Some(serde_json::from_str(&json).map_err(js_error)?),
        None => None,
    };
    let notebook: Option<Notebook> = match notebook_json {
        Some(json) => Some(serde_json::from_str(&json).map_err(js_error)?),
        None => None,
    };
    let resolved = style::resolve_style(entry.as_ref(), notebook.as_ref());
    serde_json::to_string(&resolved).map_err(js_error)
}

/// Resolve effective font settings from the notebook defaults
#[wasm_bindgen(js_name = resolveFontSettings)]
pub fn resolve_font_settings_json(notebook_json: Option<String>) -> Result<String, JsValue> {
    let notebook: Option<Notebook> = match notebook_json {
        Some(json) => Some(serde_json::from_str(&json).map_err(js_error)?),
        None => None,
    };
    let settings = style::resolve_font_settings(notebook.as_ref());
    serde_json::to_string(&settings).map_err(js_error)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn entries_json() -> String {
        let mut entries = Vec::new();
        for day in 1..=4 {
            entries.push(format!(
                r#"{{"id":"e{day}","notebookId":"nb1","title":"Day {day}","content":"{content}","date":"2024-03-0{day}T20:15:00Z","createdAt":"2024-03-0{day}T20:15:00Z","updatedAt":"2024-03-0{day}T20:15:00Z"}}"#,
                content = "x".repeat(100),
            ));
        }
        format!("[{}]", entries.join(","))
    }

    #[wasm_bindgen_test]
    fn bridge_paginates_and_navigates() {
        let mut reader = WasmReader::new(508.0, 16.0).unwrap();
        reader.load_entries(&entries_json()).unwrap();
        assert_eq!(reader.total_pages(), 2);
        assert_eq!(reader.current_page(), 1);

        assert!(reader.next_page());
        assert_eq!(reader.current_page(), 2);
        assert!(!reader.next_page());
        assert_eq!(reader.preload_targets(), vec![1]);
    }

    #[wasm_bindgen_test]
    fn bridge_resolves_style() {
        let notebook = r#"{"id":"nb1","paperStyle":"lined","fontFamily":"serif","fontSize":18.0,"lineHeight":1.6}"#;
        let resolved = resolve_style_json(None, Some(notebook.to_string())).unwrap();
        assert_eq!(resolved, "\"lined\"");
    }
}
