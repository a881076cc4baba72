use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::Primitive;

/// Text block payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font family name.
    pub font: String,
    /// Font size in surface units.
    pub size: f64,
    pub color: Color,
    /// Top-left of the text block in surface units.
    pub origin: Vec2,
    /// Wrapping width. `None` = single unwrapped block sized to its content.
    pub max_width: Option<f64>,
    /// Measured extent. Zero until the surface has measured the block.
    pub extent: Vec2,
}

impl TextCmd {
    pub fn new(
        text: impl Into<String>,
        font: impl Into<String>,
        size: f64,
        color: Color,
        origin: Vec2,
        max_width: Option<f64>,
    ) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            size,
            color,
            origin,
            max_width,
            extent: Vec2::zero(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        Some(Rect::from_origin_size(self.origin, self.extent))
    }
}

impl From<TextCmd> for Primitive {
    fn from(cmd: TextCmd) -> Self {
        Primitive::Text(cmd)
    }
}
