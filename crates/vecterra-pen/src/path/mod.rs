//! Path composition: splines, arcs, wedges, external data and meta-paths.
//!
//! Every drawing operation has a data-only counterpart returning a [`PathFragment`];
//! the emitting method is a thin wrapper that turns the fragment into a [`PathCmd`].
//!
//! [`PathCmd`]: vecterra_engine::scene::PathCmd

mod compose;
pub mod geometry;
mod meta;

use std::fmt;

use vecterra_engine::coords::{Rect, Vec2};
use vecterra_script::PathKind;

/// Path data computed without emitting anything.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFragment {
    /// SVG path data.
    pub data: String,
    /// Surface-space end point.
    pub end: Vec2,
    /// Terminal heading, when one was computed.
    pub heading: Option<f64>,
    /// Bounds of the control geometry, in surface space.
    pub bounds: Option<Rect>,
}

/// Usage errors raised while composing a path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// Not enough control points for the spline kind.
    TooFewPoints { kind: PathKind, needed: usize, got: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::TooFewPoints { kind, needed, got } => write!(
                f,
                "{} needs at least {needed} control point(s), got {got}",
                kind.opcode()
            ),
        }
    }
}

impl std::error::Error for PathError {}
