//! Paint model for emitted primitives.
//!
//! Scope:
//! - color representation (straight sRGB bytes + alpha)
//! - CSS parsing / formatting, since the output is consumed by an SVG renderer
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ColorParseError};
