//! Scene (primitive stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic vector primitives
//! - keep insertion order as paint order
//! - keep shape-specific payloads isolated per shape file under `scene::shapes`
//! - serialize primitives as SVG elements (`scene::svg`)

mod cmd;
mod list;
mod svg;

pub mod shapes;

pub use cmd::Primitive;
pub use list::DrawList;
pub use shapes::circle::CircleCmd;
pub use shapes::image::ImageCmd;
pub use shapes::line::LineCmd;
pub use shapes::path::PathCmd;
pub use shapes::rect::RectCmd;
pub use shapes::text::TextCmd;
pub use shapes::{Linecap, Stroke};
pub use svg::escape_xml;
