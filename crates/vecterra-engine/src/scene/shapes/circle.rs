use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::Primitive;

use super::Stroke;

/// Circle payload. Dots are circles whose fill matches the stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f64,
    pub stroke: Stroke,
    pub fill: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f64, stroke: Stroke, fill: Color) -> Self {
        Self { center, radius, stroke, fill }
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        Some(Rect::around(self.center, self.radius.abs()))
    }
}

impl From<CircleCmd> for Primitive {
    fn from(cmd: CircleCmd) -> Self {
        Primitive::Circle(cmd)
    }
}
