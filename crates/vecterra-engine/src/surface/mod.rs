//! Drawing surfaces.
//!
//! A [`Surface`] owns a rectangular drawing area split into ordered layers, one per pen.
//! Pens only ever talk to this trait; [`SvgSurface`] is the in-memory SVG document
//! implementation shipped with the engine.

mod registry;
mod svg;

pub use registry::{ScreenIds, ScreenRegistry};
pub use svg::{Layer, ScreenConfig, SvgSurface};

use crate::coords::{Affine, Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::scene::{Primitive, TextCmd};

/// Opaque handle to a layer on a [`Surface`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LayerId(usize);

impl LayerId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Where a new layer goes in paint order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Placement {
    /// Above every existing layer.
    #[default]
    Top,
    /// Below every existing layer.
    Bottom,
    /// Directly below the given layer.
    Behind(LayerId),
    /// Directly above the given layer.
    OnTopOf(LayerId),
}

/// The capabilities a pen needs from whatever it draws into.
pub trait Surface {
    /// Identity of the surface (the SVG root id for [`SvgSurface`]).
    fn id(&self) -> &str;

    /// Identity of the container holding the pen layers.
    fn group_id(&self) -> &str;

    /// Drawing area in surface units. Fixed for the surface's lifetime.
    fn viewport(&self) -> Viewport;

    /// Number of layers created so far.
    fn layer_count(&self) -> usize;

    /// Layers in paint order, bottom first.
    fn layer_order(&self) -> Vec<LayerId>;

    /// Creates an empty layer at `placement` and returns its handle.
    fn create_layer(&mut self, placement: Placement) -> LayerId;

    /// Display name of a layer, if it exists.
    fn layer_name(&self, layer: LayerId) -> Option<&str>;

    /// Appends a primitive on top of the layer's existing content.
    fn append(&mut self, layer: LayerId, primitive: Primitive);

    /// Removes every primitive from one layer.
    fn clear_layer(&mut self, layer: LayerId);

    /// Removes every primitive from every layer.
    fn clear(&mut self);

    fn set_background(&mut self, color: Color);

    /// Replaces the transform applied to a whole layer at render time.
    fn set_layer_transform(&mut self, layer: LayerId, transform: Affine);

    /// Rendered extent of a text block.
    fn measure_text(&self, text: &TextCmd) -> Vec2;

    /// Untransformed bounds of the layer's committed content.
    fn content_bounds(&self, layer: LayerId) -> Option<Rect>;
}
