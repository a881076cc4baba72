use crate::coords::{Rect, Vec2};
use crate::scene::Primitive;

use super::Stroke;

/// Straight segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, stroke: Stroke) -> Self {
        Self { from, to, stroke }
    }

    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points([self.from, self.to])
    }
}

impl From<LineCmd> for Primitive {
    fn from(cmd: LineCmd) -> Self {
        Primitive::Line(cmd)
    }
}
