pub(crate) mod circle;
pub(crate) mod image;
pub(crate) mod line;
pub(crate) mod path;
pub(crate) mod rect;
pub(crate) mod text;

use std::fmt;

use crate::paint::Color;

/// Line end style.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Linecap {
    #[default]
    Round,
    Square,
}

impl Linecap {
    pub fn as_str(self) -> &'static str {
        match self {
            Linecap::Round => "round",
            Linecap::Square => "square",
        }
    }
}

impl fmt::Display for Linecap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outline of a shape.
///
/// `width` and `linecap` are optional because dots and rectangles leave them to the
/// renderer's defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: Option<f64>,
    pub linecap: Option<Linecap>,
}

impl Stroke {
    /// Color-only stroke.
    #[inline]
    pub fn color(color: Color) -> Self {
        Self { color, width: None, linecap: None }
    }

    #[inline]
    pub fn new(color: Color, width: f64, linecap: Linecap) -> Self {
        Self { color, width: Some(width), linecap: Some(linecap) }
    }
}
