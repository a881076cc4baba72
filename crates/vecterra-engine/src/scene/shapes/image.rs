use crate::coords::{Rect, Vec2};
use crate::scene::Primitive;

/// Embedded raster or vector image reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    /// Top-left corner in surface units.
    pub origin: Vec2,
    pub width: f64,
    pub height: f64,
    pub href: String,
}

impl ImageCmd {
    #[inline]
    pub fn new(origin: Vec2, width: f64, height: f64, href: impl Into<String>) -> Self {
        Self { origin, width, height, href: href.into() }
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(self.origin.x, self.origin.y, self.width, self.height).normalized())
    }
}

impl From<ImageCmd> for Primitive {
    fn from(cmd: ImageCmd) -> Self {
        Primitive::Image(cmd)
    }
}
