use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::Primitive;

use super::Stroke;

/// Rectangle payload. Square dots are rectangles too.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub stroke: Stroke,
    pub fill: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, stroke: Stroke, fill: Color) -> Self {
        Self { rect, stroke, fill }
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        Some(self.rect.normalized())
    }
}

impl From<RectCmd> for Primitive {
    fn from(cmd: RectCmd) -> Self {
        Primitive::Rect(cmd)
    }
}
