//! Coordinate and geometry types shared by the surface and the pens.
//!
//! Surface space:
//! - Origin top-left
//! - +X right, +Y down
//!
//! User space is centred on the viewport with +Y up; [`CoordSpace`] converts between the two.

mod affine;
mod rect;
mod space;
mod vec2;
mod viewport;

pub use affine::Affine;
pub use rect::Rect;
pub use space::{CoordSpace, Space};
pub use vec2::Vec2;
pub use viewport::Viewport;
