//! Vecterra pens: turtle-style cursors on top of `vecterra-engine`.
//!
//! # Quick start
//!
//! ```rust
//! use vecterra_pen::prelude::*;
//!
//! let (screen, svg) = Screen::shared(SvgSurface::standalone(ScreenConfig::default()));
//! let mut pen = screen.add_pen(Placement::Top);
//!
//! pen.set_pen_color(Color::rgb(255, 200, 0));
//! for _ in 0..4 {
//!     pen.forward(100.0);
//!     pen.right(90.0);
//! }
//! pen.path_cubic(&PathSpec::points([(50.0, 50.0), (100.0, 0.0)]));
//!
//! let document = svg.borrow().to_string();
//! assert!(document.contains("<line"));
//! ```
//!
//! # Coordinates
//!
//! User space has its origin at the screen centre with +Y up; headings are degrees
//! anticlockwise from +X. Primitives are emitted in surface space (top-left origin,
//! +Y down). [`Pen::coords`] is the only bridge between the two.

pub mod path;
pub mod pen;
pub mod screen;
pub mod script;
pub mod transform;

pub use path::{PathError, PathFragment};
pub use pen::{normalize_degrees, Pen, PenStyle};
pub use screen::Screen;

/// Everything needed to draw with a pen.
pub mod prelude {
    pub use crate::path::{PathError, PathFragment};
    pub use crate::pen::{Pen, PenStyle};
    pub use crate::screen::Screen;

    pub use vecterra_engine::coords::{Affine, Rect, Space, Vec2};
    pub use vecterra_engine::paint::Color;
    pub use vecterra_engine::scene::Linecap;
    pub use vecterra_engine::surface::{Placement, ScreenConfig, ScreenRegistry, Surface, SvgSurface};

    pub use vecterra_script::{
        Action, ArcSweep, Command, MetaAction, PathKind, PathOptions, PathSpec, RectAlign, TextJump,
    };
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vecterra_engine::coords::Vec2;
    use vecterra_engine::surface::{ScreenConfig, SvgSurface};

    use crate::screen::Screen;

    /// An 800x600 standalone screen plus a typed handle to inspect it.
    pub fn screen() -> (Screen, Rc<RefCell<SvgSurface>>) {
        Screen::shared(SvgSurface::standalone(ScreenConfig::default()))
    }

    pub fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }
}
