use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use vecterra_engine::coords::Viewport;
use vecterra_engine::paint::Color;
use vecterra_engine::surface::{LayerId, Placement, Surface};

use crate::pen::Pen;

/// Shared handle to a drawing surface.
///
/// Every pen attached to a screen holds a clone of the same handle. Cloning is cheap
/// and never copies the surface.
#[derive(Clone)]
pub struct Screen {
    surface: Rc<RefCell<dyn Surface>>,
}

impl Screen {
    /// Wraps a surface the caller no longer needs direct access to.
    pub fn new<S: Surface + 'static>(surface: S) -> Self {
        Self { surface: Rc::new(RefCell::new(surface)) }
    }

    /// Wraps `surface` and also hands back a typed handle to it, e.g. to serialize an
    /// [`SvgSurface`](vecterra_engine::surface::SvgSurface) after drawing.
    pub fn shared<S: Surface + 'static>(surface: S) -> (Self, Rc<RefCell<S>>) {
        let typed = Rc::new(RefCell::new(surface));
        let erased: Rc<RefCell<dyn Surface>> = typed.clone();
        (Self { surface: erased }, typed)
    }

    /// Attaches a new pen on its own layer at `placement`.
    pub fn add_pen(&self, placement: Placement) -> Pen {
        Pen::attach(self.clone(), placement)
    }

    pub fn id(&self) -> String {
        self.surface.borrow().id().to_string()
    }

    pub fn group_id(&self) -> String {
        self.surface.borrow().group_id().to_string()
    }

    pub fn viewport(&self) -> Viewport {
        self.surface.borrow().viewport()
    }

    /// Pen layers in paint order, bottom first.
    pub fn layer_order(&self) -> Vec<LayerId> {
        self.surface.borrow().layer_order()
    }

    /// Number of pens ever attached.
    pub fn pen_count(&self) -> usize {
        self.surface.borrow().layer_count()
    }

    pub fn set_background(&self, color: Color) {
        self.surface.borrow_mut().set_background(color);
    }

    /// Clears every pen layer.
    pub fn clear(&self) {
        self.surface.borrow_mut().clear();
    }

    pub(crate) fn surface(&self) -> Ref<'_, dyn Surface> {
        self.surface.borrow()
    }

    pub(crate) fn surface_mut(&self) -> RefMut<'_, dyn Surface> {
        self.surface.borrow_mut()
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen").field("id", &self.id()).finish()
    }
}

#[cfg(test)]
mod tests {
    use vecterra_engine::surface::Placement;

    use crate::test_support::screen;

    #[test]
    fn layer_order_follows_placement() {
        let (screen, _) = screen();
        let first = screen.add_pen(Placement::Top);
        let top = screen.add_pen(Placement::Top);
        let under = screen.add_pen(Placement::Behind(first.layer()));
        assert_eq!(screen.layer_order(), vec![under.layer(), first.layer(), top.layer()]);
        assert_eq!(screen.pen_count(), 3);
    }
}
