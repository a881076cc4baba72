use super::{Vec2, Viewport};

/// Coordinate space selector for query results.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Space {
    /// Origin at the screen centre, +Y up.
    #[default]
    User,
    /// Origin top-left, +Y down.
    Surface,
}

/// Mapping between user space and surface space.
///
/// This is the only place the y-flip happens. Everything stored inside a pen is in
/// surface space; user-facing accessors convert on the way out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordSpace {
    origin: Vec2,
}

impl CoordSpace {
    /// `origin` is the surface-space position of the user-space origin.
    #[inline]
    pub const fn new(origin: Vec2) -> Self {
        Self { origin }
    }

    #[inline]
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(viewport.center())
    }

    #[inline]
    pub fn origin(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn to_surface(self, user: Vec2) -> Vec2 {
        Vec2::new(self.origin.x + user.x, self.origin.y - user.y)
    }

    #[inline]
    pub fn to_user(self, surface: Vec2) -> Vec2 {
        Vec2::new(surface.x - self.origin.x, -(surface.y - self.origin.y))
    }

    /// Expresses a surface-space point in `space`.
    #[inline]
    pub fn express(self, surface: Vec2, space: Space) -> Vec2 {
        match space {
            Space::User => self.to_user(surface),
            Space::Surface => surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn screen() -> CoordSpace {
        CoordSpace::for_viewport(Viewport::new(800.0, 600.0))
    }

    #[test]
    fn origin_maps_to_centre() {
        assert_eq!(screen().to_surface(Vec2::zero()), Vec2::new(400.0, 300.0));
        assert_eq!(screen().to_user(Vec2::new(400.0, 300.0)), Vec2::zero());
    }

    #[test]
    fn y_axis_is_flipped() {
        assert_eq!(screen().to_surface(Vec2::new(10.0, 20.0)), Vec2::new(410.0, 280.0));
        assert_eq!(screen().to_user(Vec2::new(0.0, 0.0)), Vec2::new(-400.0, 300.0));
    }

    #[test]
    fn express_surface_is_passthrough() {
        let p = Vec2::new(1.0, 2.0);
        assert_eq!(screen().express(p, Space::Surface), p);
        assert_eq!(screen().express(p, Space::User), Vec2::new(-399.0, 298.0));
    }

    proptest! {
        #[test]
        fn user_surface_round_trip(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
            let back = screen().to_user(screen().to_surface(Vec2::new(x, y)));
            prop_assert!((back.x - x).abs() < 1e-6);
            prop_assert!((back.y - y).abs() < 1e-6);
        }
    }
}
