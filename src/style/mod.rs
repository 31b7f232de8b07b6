//! Paper style and font resolution
//!
//! Two-level inheritance: an entry's explicit override wins over the
//! notebook default, which wins over the fixed fallback. Both resolvers are
//! total functions; absent inputs degrade to the fallback instead of
//! erroring.

use serde::{Deserialize, Serialize};

use crate::model::{Entry, Notebook};

/// Paper texture rendered behind a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperStyle {
    #[default]
    Blank,
    Lined,
    Grid,
    Dotted,
    Vintage,
}

/// Fallback font family identifier
pub const DEFAULT_FONT_FAMILY: &str = "system";

/// Fallback font size in length units
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Fallback line-height multiplier
pub const DEFAULT_LINE_HEIGHT: f32 = 1.5;

/// Allowed notebook font size range
pub const FONT_SIZE_RANGE: (f32, f32) = (12.0, 24.0);

/// Allowed notebook line-height range
pub const LINE_HEIGHT_RANGE: (f32, f32) = (1.2, 2.0);

/// Resolve the effective paper style for a displayed entry
///
/// The entry override wins; otherwise the notebook default applies;
/// otherwise `PaperStyle::Blank`.
pub fn resolve_style(entry: Option<&Entry>, notebook: Option<&Notebook>) -> PaperStyle {
    if let Some(style) = entry.and_then(|e| e.paper_style) {
        return style;
    }
    if let Some(notebook) = notebook {
        return notebook.paper_style;
    }
    PaperStyle::default()
}

/// Effective font settings for rendering a notebook's pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettings {
    pub family: String,
    pub size: f32,
    pub line_height: f32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

/// Resolve effective font settings from the notebook defaults
///
/// Out-of-range sizes are clamped into bounds rather than rejected. An
/// empty family identifier falls back to [`DEFAULT_FONT_FAMILY`].
pub fn resolve_font_settings(notebook: Option<&Notebook>) -> FontSettings {
    match notebook {
        Some(notebook) => FontSettings {
            family: if notebook.font_family.is_empty() {
                DEFAULT_FONT_FAMILY.to_string()
            } else {
                notebook.font_family.clone()
            },
            size: notebook.font_size.clamp(FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1),
            line_height: notebook
                .line_height
                .clamp(LINE_HEIGHT_RANGE.0, LINE_HEIGHT_RANGE.1),
        },
        None => FontSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(style: Option<PaperStyle>) -> Entry {
        let date = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let entry = Entry::new("e1", "nb1", "Title", "Content", date);
        match style {
            Some(style) => entry.with_paper_style(style),
            None => entry,
        }
    }

    #[test]
    fn test_override_wins() {
        let entry = entry(Some(PaperStyle::Vintage));
        let notebook = Notebook::new("nb1").with_paper_style(PaperStyle::Lined);
        assert_eq!(
            resolve_style(Some(&entry), Some(&notebook)),
            PaperStyle::Vintage
        );
    }

    #[test]
    fn test_inherits_notebook_default() {
        let entry = entry(None);
        let notebook = Notebook::new("nb1").with_paper_style(PaperStyle::Lined);
        assert_eq!(
            resolve_style(Some(&entry), Some(&notebook)),
            PaperStyle::Lined
        );
        assert_eq!(resolve_style(None, Some(&notebook)), PaperStyle::Lined);
    }

    #[test]
    fn test_fallback_is_blank() {
        assert_eq!(resolve_style(None, None), PaperStyle::Blank);
        assert_eq!(resolve_style(Some(&entry(None)), None), PaperStyle::Blank);
    }

    #[test]
    fn test_font_settings_default_triple() {
        let settings = resolve_font_settings(None);
        assert_eq!(settings.family, "system");
        assert_eq!(settings.size, 16.0);
        assert_eq!(settings.line_height, 1.5);
    }

    #[test]
    fn test_font_settings_clamped() {
        let notebook = Notebook::new("nb1")
            .with_font_size(40.0)
            .with_line_height(0.5);
        let settings = resolve_font_settings(Some(&notebook));
        assert_eq!(settings.size, 24.0);
        assert_eq!(settings.line_height, 1.2);

        let notebook = Notebook::new("nb1")
            .with_font_size(4.0)
            .with_line_height(3.0);
        let settings = resolve_font_settings(Some(&notebook));
        assert_eq!(settings.size, 12.0);
        assert_eq!(settings.line_height, 2.0);
    }

    #[test]
    fn test_in_range_values_pass_through() {
        let mut notebook = Notebook::new("nb1")
            .with_font_size(18.0)
            .with_line_height(1.8);
        notebook.font_family = "serif".to_string();

        let settings = resolve_font_settings(Some(&notebook));
        assert_eq!(settings.family, "serif");
        assert_eq!(settings.size, 18.0);
        assert_eq!(settings.line_height, 1.8);
    }

    #[test]
    fn test_empty_family_falls_back() {
        let mut notebook = Notebook::new("nb1");
        notebook.font_family = String::new();
        assert_eq!(resolve_font_settings(Some(&notebook)).family, "system");
    }
}
