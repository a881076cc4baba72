//! Text measurement for text-block primitives.

mod font_book;

pub use font_book::{FontBook, FontLoadError};
