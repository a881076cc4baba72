use vecterra_engine::paint::Color;
use vecterra_engine::scene::{Linecap, Stroke};

/// Per-pen drawing style. Captured into each primitive at emission time.
#[derive(Debug, Clone, PartialEq)]
pub struct PenStyle {
    pub stroke: Color,
    pub width: f64,
    pub fill: Color,
    pub linecap: Linecap,
    /// Font family for text blocks.
    pub font: String,
    /// Text size in surface units.
    pub text_size: f64,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            stroke: Color::white(),
            width: 1.0,
            fill: Color::rgba(255, 255, 255, 0.4),
            linecap: Linecap::Round,
            font: "monospace".to_string(),
            text_size: 30.0,
        }
    }
}

impl PenStyle {
    /// Full stroke used by lines and paths.
    #[inline]
    pub fn line_stroke(&self) -> Stroke {
        Stroke::new(self.stroke, self.width, self.linecap)
    }
}
