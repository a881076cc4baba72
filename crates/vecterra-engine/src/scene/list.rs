use crate::coords::Rect;

use super::Primitive;

/// Ordered primitive stream.
///
/// Used both as a layer's committed content and as a pen's pending-render buffer.
/// Insertion order is paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<Primitive>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[Primitive] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.items.push(primitive.into());
    }

    /// Removes every item, yielding them in insertion order.
    #[inline]
    pub fn drain(&mut self) -> std::vec::Drain<'_, Primitive> {
        self.items.drain(..)
    }

    /// Union of the bounds of every item that has bounds.
    pub fn bounds(&self) -> Option<Rect> {
        self.items
            .iter()
            .filter_map(Primitive::bounds)
            .reduce(Rect::union)
    }
}
