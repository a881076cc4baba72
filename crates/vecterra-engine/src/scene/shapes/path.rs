use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::Primitive;

use super::Stroke;

/// Path payload carrying raw SVG path data.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    /// Path data in the SVG mini-language (`M`, `L`, `A`, `S`, `T`, ...).
    pub data: String,
    pub stroke: Stroke,
    pub fill: Color,
    /// Conservative bounds computed by whoever built `data`. `None` for opaque external data.
    pub bounds: Option<Rect>,
}

impl PathCmd {
    #[inline]
    pub fn new(data: impl Into<String>, stroke: Stroke, fill: Color, bounds: Option<Rect>) -> Self {
        Self { data: data.into(), stroke, fill, bounds }
    }
}

impl From<PathCmd> for Primitive {
    fn from(cmd: PathCmd) -> Self {
        Primitive::Path(cmd)
    }
}
