//! Vecterra engine crate.
//!
//! This crate owns the geometry, paint and surface pieces the pen layer draws into.
//! Nothing here knows about headings or action programs; see `vecterra-pen` for that.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;
pub mod text;
