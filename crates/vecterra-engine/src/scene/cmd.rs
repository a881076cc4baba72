use crate::coords::Rect;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::image::ImageCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::path::PathCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// Persisted vector primitive.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - add its bounds below and its element in `scene::svg`
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LineCmd),
    Circle(CircleCmd),
    Rect(RectCmd),
    Text(TextCmd),
    Image(ImageCmd),
    Path(PathCmd),
}

impl Primitive {
    /// Untransformed bounds in surface units, when known.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Primitive::Line(c) => c.bounds(),
            Primitive::Circle(c) => c.bounds(),
            Primitive::Rect(c) => c.bounds(),
            Primitive::Text(c) => c.bounds(),
            Primitive::Image(c) => c.bounds(),
            Primitive::Path(c) => c.bounds,
        }
    }

    /// Short element-ish name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Line(_) => "line",
            Primitive::Circle(_) => "circle",
            Primitive::Rect(_) => "rect",
            Primitive::Text(_) => "text",
            Primitive::Image(_) => "image",
            Primitive::Path(_) => "path",
        }
    }
}
