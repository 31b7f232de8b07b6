//! Diary records consumed by the reading core
//!
//! Entries and notebooks are owned by the external stores; this core reads
//! them and never writes them back. Entries handed to the paginator must
//! already be sorted by `date` ascending; the core does not sort and does
//! not detect unsorted input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::style::{PaperStyle, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT};

/// Opaque entry identifier assigned by the entry store
pub type EntryId = String;

/// Opaque notebook identifier assigned by the notebook store
pub type NotebookId = String;

/// A single diary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub notebook_id: NotebookId,
    pub title: String,
    /// Body text; may contain embedded line breaks
    pub content: String,
    /// Chronological ordering key
    pub date: DateTime<Utc>,
    /// Per-entry paper override; `None` inherits the notebook default
    #[serde(default)]
    pub paper_style: Option<PaperStyle>,
    #[serde(default)]
    pub bookmarked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create an entry with no style override and no bookmark
    pub fn new(
        id: impl Into<EntryId>,
        notebook_id: impl Into<NotebookId>,
        title: impl Into<String>,
        content: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            notebook_id: notebook_id.into(),
            title: title.into(),
            content: content.into(),
            date,
            paper_style: None,
            bookmarked: false,
            created_at: date,
            updated_at: date,
        }
    }

    pub fn with_paper_style(mut self, style: PaperStyle) -> Self {
        self.paper_style = Some(style);
        self
    }

    pub fn with_bookmark(mut self) -> Self {
        self.bookmarked = true;
        self
    }
}

/// A notebook holding entries, with default visual settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notebook {
    pub id: NotebookId,
    /// Default paper style for entries without an override
    pub paper_style: PaperStyle,
    /// Font family identifier understood by the presentation layer
    pub font_family: String,
    /// Nominal size in [12, 24]; out-of-range values are clamped on resolve
    pub font_size: f32,
    /// Multiplier in [1.2, 2.0]; out-of-range values are clamped on resolve
    pub line_height: f32,
    #[serde(default)]
    pub archived: bool,
}

impl Notebook {
    /// Create a notebook with the system default settings
    pub fn new(id: impl Into<NotebookId>) -> Self {
        Self {
            id: id.into(),
            paper_style: PaperStyle::default(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            archived: false,
        }
    }

    pub fn with_paper_style(mut self, style: PaperStyle) -> Self {
        self.paper_style = style;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }
}
