use std::collections::HashMap;
use std::fmt;

use crate::coords::Vec2;

/// Advance of one glyph, in ems, used when a family has no loaded font.
const FALLBACK_ADVANCE_EM: f64 = 0.6;
/// Line height, in ems, used when a family has no loaded font.
const FALLBACK_LINE_EM: f64 = 1.2;

/// Error returned by [`FontBook::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Fonts keyed by CSS family name.
///
/// Text primitives name their font by family, the way the SVG output does, so the
/// book is looked up by that name. Families without a loaded font are measured with a
/// fixed-advance estimate.
#[derive(Default)]
pub struct FontBook {
    fonts: HashMap<String, fontdue::Font>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font and registers it under `family`.
    ///
    /// A later load under the same family replaces the earlier one.
    pub fn load_font(&mut self, family: impl Into<String>, bytes: &[u8]) -> Result<(), FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let family = family.into();
        log::debug!("font loaded for family {family:?}");
        self.fonts.insert(family, font);
        Ok(())
    }

    /// Computes the extent of a laid-out text block.
    ///
    /// Newlines always break; `max_width` additionally wraps long lines.
    #[must_use]
    pub fn measure_text(&self, text: &str, family: &str, size: f64, max_width: Option<f64>) -> Vec2 {
        match self.fonts.get(family) {
            Some(font) => measure_with_font(font, text, size, max_width),
            None => {
                log::trace!("no font for family {family:?}; using fixed-advance estimate");
                estimate(text, size, max_width)
            }
        }
    }
}

fn measure_with_font(font: &fontdue::Font, text: &str, size: f64, max_width: Option<f64>) -> Vec2 {
    use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

    let px = size as f32;
    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings {
        max_width: max_width.map(|w| w as f32),
        ..LayoutSettings::default()
    });
    layout.append(&[font], &TextStyle::new(text, px, 0));

    let glyphs = layout.glyphs();
    if glyphs.is_empty() {
        return Vec2::new(0.0, size * FALLBACK_LINE_EM);
    }

    // Pen position after each glyph rather than the bitmap edge, so trailing spaces count.
    let w = glyphs
        .iter()
        .map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, px);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        })
        .fold(0.0f32, f32::max);
    Vec2::new(w as f64, layout.height() as f64)
}

fn estimate(text: &str, size: f64, max_width: Option<f64>) -> Vec2 {
    let advance = size * FALLBACK_ADVANCE_EM;
    let mut width = 0.0f64;
    let mut lines = 0usize;

    for line in text.split('\n') {
        let natural = line.chars().count() as f64 * advance;
        match max_width {
            Some(max) if max > 0.0 && natural > max => {
                width = width.max(max);
                lines += (natural / max).ceil() as usize;
            }
            _ => {
                width = width.max(natural);
                lines += 1;
            }
        }
    }

    Vec2::new(width, lines as f64 * size * FALLBACK_LINE_EM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_single_line() {
        let book = FontBook::new();
        let ext = book.measure_text("hello", "monospace", 10.0, None);
        assert!((ext.x - 30.0).abs() < 1e-9);
        assert!((ext.y - 12.0).abs() < 1e-9);
    }

    #[test]
    fn estimate_counts_newlines() {
        let ext = FontBook::new().measure_text("ab\nabcd", "monospace", 10.0, None);
        assert!((ext.x - 24.0).abs() < 1e-9);
        assert!((ext.y - 24.0).abs() < 1e-9);
    }

    #[test]
    fn estimate_wraps_at_max_width() {
        let ext = FontBook::new().measure_text("abcdefghij", "monospace", 10.0, Some(30.0));
        assert!((ext.x - 30.0).abs() < 1e-9);
        assert!((ext.y - 24.0).abs() < 1e-9);
    }

    #[test]
    fn bad_font_bytes_fail_to_load() {
        let mut book = FontBook::new();
        assert!(book.load_font("broken", b"not a font").is_err());
        let fallback = FontBook::new().measure_text("ab", "broken", 10.0, None);
        assert_eq!(book.measure_text("ab", "broken", 10.0, None), fallback);
    }
}
