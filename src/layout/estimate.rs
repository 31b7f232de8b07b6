//! Approximate entry height estimation
//!
//! No text-measurement dependency: the estimate assumes a fixed average
//! characters-per-line regardless of the real rendering width. The result is
//! self-consistent and monotone, not pixel-accurate.

use unicode_segmentation::UnicodeSegmentation;

use crate::model::Entry;

/// Estimation constants
///
/// All fields are tunable; none of the defaults carry a derivation beyond
/// matching the notebook view they approximate.
#[derive(Debug, Clone, Copy)]
pub struct HeightEstimator {
    /// Assumed average grapheme clusters per rendered content line
    pub chars_per_line: usize,
    /// Line count reserved for the title block
    pub title_lines: u32,
    /// Title size relative to the body font size
    pub title_scale: f32,
    /// Line height as a multiple of the font size, independent of the
    /// notebook's own line-height setting
    pub line_height_factor: f32,
    /// Whitespace allowance applied to the summed contributions
    pub margin_factor: f32,
}

impl Default for HeightEstimator {
    fn default() -> Self {
        Self {
            chars_per_line: 50,
            title_lines: 2,
            title_scale: 1.5,
            line_height_factor: 1.5,
            margin_factor: 1.2,
        }
    }
}

impl HeightEstimator {
    /// Estimate the rendered height of `entry` at `font_size`
    ///
    /// Units match whatever unit `font_size` is expressed in. Monotone
    /// non-decreasing in both the content length and the font size.
    pub fn estimate(&self, entry: &Entry, font_size: f32) -> f32 {
        let line_height = font_size * self.line_height_factor;

        let title_height = self.title_lines as f32 * line_height * self.title_scale;

        let content_graphemes = entry.content.graphemes(true).count();
        let content_lines =
            (content_graphemes as f32 / self.chars_per_line as f32).ceil();
        let content_height = content_lines * line_height;

        // Date/byline row under the title
        let metadata_height = line_height;

        (title_height + content_height + metadata_height) * self.margin_factor
    }
}
